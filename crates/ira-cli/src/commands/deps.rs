use std::path::Path;

use anyhow::Context;
use ira_core::entities::Dependency;
use ira_insight::DependencyExport;
use ira_views::{DependenciesHook, ProjectHook};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::settled;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ExportReport {
    path: String,
    mime_type: &'static str,
    dependencies: usize,
}

#[derive(Serialize)]
struct DependencyRow<'a> {
    source_file: &'a str,
    name: &'a str,
    version: &'a str,
    ecosystem: &'a str,
    scope: &'a str,
}

/// Handle `ira deps`.
pub async fn handle(
    project_id: &str,
    export: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dependencies_hook = DependenciesHook::new(ctx.services.analysis.clone());
    let project_hook = ProjectHook::new(ctx.services.projects.clone());
    tokio::join!(
        dependencies_hook.bind(Some(project_id)),
        project_hook.bind(Some(project_id)),
    );
    let dependencies = settled(dependencies_hook.state(), "dependencies")?;

    if let Some(filename) = export {
        let project = settled(project_hook.state(), "project")?;
        let file =
            ira_insight::export_dependencies(&export_name(filename), &project.name, &dependencies)?;
        write_export(&file, Path::new(filename))?;
        return output(
            &ExportReport {
                path: filename.to_string(),
                mime_type: file.mime_type,
                dependencies: dependencies.len(),
            },
            flags.format,
        );
    }

    let groups = ira_insight::group_by_source_file(&dependencies);
    if flags.format == OutputFormat::Table {
        output(&rows(&groups), flags.format)
    } else {
        output(&groups, flags.format)
    }
}

fn rows(groups: &ira_core::LabelMap<Vec<Dependency>>) -> Vec<DependencyRow<'_>> {
    groups
        .iter()
        .flat_map(|(source_file, dependencies)| {
            dependencies.iter().map(move |d| DependencyRow {
                source_file,
                name: &d.name,
                version: d.version.as_deref().unwrap_or("-"),
                ecosystem: &d.ecosystem,
                scope: &d.scope,
            })
        })
        .collect()
}

/// The format is chosen from the file name alone; directories never count.
fn export_name(target: &str) -> String {
    Path::new(target)
        .file_name()
        .map_or_else(|| target.to_string(), |name| name.to_string_lossy().into_owned())
}

fn write_export(file: &DependencyExport, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, &file.content)
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dependency(name: &str, source_file: &str) -> Dependency {
        Dependency {
            name: name.to_string(),
            version: Some("1.0".to_string()),
            ecosystem: "pypi".to_string(),
            scope: "runtime".to_string(),
            source_file: source_file.to_string(),
        }
    }

    #[test]
    fn export_file_lands_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        let file = ira_insight::export_dependencies(
            "requirements.txt",
            "demo",
            &[dependency("flask", "requirements.txt")],
        )
        .unwrap();

        write_export(&file, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), file.content);
        assert_eq!(file.content, "flask==1.0");
    }

    #[test]
    fn directory_names_do_not_pick_the_format() {
        let dir = tempfile::tempdir().unwrap();
        let target_dir = dir.path().join("requirements-audit");
        std::fs::create_dir(&target_dir).unwrap();
        let target = target_dir.join("package.json");
        let target = target.to_str().unwrap();

        assert_eq!(export_name(target), "package.json");
        let file = ira_insight::export_dependencies(
            &export_name(target),
            "demo",
            &[dependency("react", "package.json")],
        )
        .unwrap();
        write_export(&file, Path::new(target)).unwrap();

        assert_eq!(file.mime_type, "application/json");
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(target).unwrap()).unwrap();
        assert_eq!(written["dependencies"]["react"], "1.0");
        assert_eq!(written["name"], "demo");
    }

    #[test]
    fn rows_follow_group_order() {
        let deps = [
            dependency("a", "package.json"),
            dependency("b", "requirements.txt"),
            dependency("c", "package.json"),
        ];
        let groups = ira_insight::group_by_source_file(&deps);
        let names: Vec<_> = rows(&groups).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
    }
}
