//! Dependency export files.
//!
//! The target filename picks the format: requirements-style `name==version`
//! lines, a minimal JSON package manifest, or a readable plain listing.

use ira_core::LabelMap;
use ira_core::entities::Dependency;
use serde::Serialize;

use crate::InsightError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `name==version` per line.
    Requirements,
    /// `{"name": .., "dependencies": {..}}`, two-space indented.
    Manifest,
    /// `name: version (ecosystem)` per line.
    Plain,
}

impl ExportFormat {
    #[must_use]
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".txt") || lower.contains("requirements") {
            Self::Requirements
        } else if lower.ends_with(".json") {
            Self::Manifest
        } else {
            Self::Plain
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Manifest => "application/json",
            Self::Requirements | Self::Plain => "text/plain",
        }
    }
}

/// A file ready to be written where the user asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyExport {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

#[derive(Serialize)]
struct Manifest {
    name: String,
    dependencies: LabelMap<String>,
}

/// Lowercase, with every whitespace run replaced by `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug
}

/// Serialize `dependencies` for `filename`.
///
/// # Errors
///
/// Returns [`InsightError::Serialize`] if the manifest cannot be encoded.
pub fn export_dependencies(
    filename: &str,
    project_name: &str,
    dependencies: &[Dependency],
) -> Result<DependencyExport, InsightError> {
    let format = ExportFormat::from_filename(filename);
    let content = match format {
        ExportFormat::Requirements => dependencies
            .iter()
            .map(|d| match &d.version {
                Some(version) => format!("{}=={version}", d.name),
                None => d.name.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        ExportFormat::Manifest => {
            let manifest = Manifest {
                name: slugify(project_name),
                dependencies: dependencies
                    .iter()
                    .map(|d| (d.name.as_str(), d.version.clone().unwrap_or_else(|| "*".into())))
                    .collect(),
            };
            serde_json::to_string_pretty(&manifest)?
        }
        ExportFormat::Plain => dependencies
            .iter()
            .map(|d| {
                format!(
                    "{}: {} ({})",
                    d.name,
                    d.version.as_deref().unwrap_or("unknown"),
                    d.ecosystem
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(DependencyExport {
        filename: filename.to_string(),
        mime_type: format.mime_type(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::dependency;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("requirements.txt", ExportFormat::Requirements)]
    #[case("deps.TXT", ExportFormat::Requirements)]
    #[case("requirements-dev.in", ExportFormat::Requirements)]
    #[case("package.json", ExportFormat::Manifest)]
    #[case("Cargo.lock", ExportFormat::Plain)]
    fn format_follows_filename(#[case] filename: &str, #[case] expected: ExportFormat) {
        assert_eq!(ExportFormat::from_filename(filename), expected);
    }

    #[test]
    fn requirements_line() {
        let out = export_dependencies(
            "requirements.txt",
            "Demo",
            &[dependency("flask", Some("2.0"), "requirements.txt")],
        )
        .unwrap();
        assert_eq!(out.content, "flask==2.0");
        assert_eq!(out.mime_type, "text/plain");
    }

    #[test]
    fn manifest_keeps_order_and_slugs_name() {
        let deps = [
            dependency("react", Some("18.2.0"), "package.json"),
            dependency("axios", None, "package.json"),
        ];
        let out = export_dependencies("package.json", "My  Cool\tProject", &deps).unwrap();
        assert_eq!(out.mime_type, "application/json");
        assert_eq!(
            out.content,
            "{\n  \"name\": \"my-cool-project\",\n  \"dependencies\": {\n    \"react\": \"18.2.0\",\n    \"axios\": \"*\"\n  }\n}"
        );
    }

    #[test]
    fn plain_listing_names_ecosystem() {
        let deps = [
            dependency("flask", Some("2.0"), "requirements.txt"),
            dependency("gunicorn", None, "requirements.txt"),
        ];
        let out = export_dependencies("deps.md", "x", &deps).unwrap();
        assert_eq!(out.content, "flask: 2.0 (pypi)\ngunicorn: unknown (pypi)");
    }

    #[test]
    fn slug_replaces_each_whitespace_run() {
        assert_eq!(slugify("IRA Observer"), "ira-observer");
        assert_eq!(slugify(" a \n b"), "-a-b");
    }

    #[test]
    fn empty_list_is_empty_file() {
        let out = export_dependencies("requirements.txt", "x", &[]).unwrap();
        assert_eq!(out.content, "");
    }
}
