use ira_core::LabelMap;
use ira_core::entities::Dependency;

/// Partition by `source_file`. Files appear in first-seen order and each
/// file's dependencies keep their input order.
#[must_use]
pub fn group_by_source_file(dependencies: &[Dependency]) -> LabelMap<Vec<Dependency>> {
    let mut groups: LabelMap<Vec<Dependency>> = LabelMap::new();
    for dependency in dependencies {
        groups
            .entry_or_default(&dependency.source_file)
            .push(dependency.clone());
    }
    groups
}

#[cfg(test)]
pub(crate) fn dependency(name: &str, version: Option<&str>, source_file: &str) -> Dependency {
    Dependency {
        name: name.to_string(),
        version: version.map(ToString::to_string),
        ecosystem: if source_file.ends_with(".json") { "npm" } else { "pypi" }.to_string(),
        scope: "runtime".to_string(),
        source_file: source_file.to_string(),
    }
}
