/// Collapse the infrastructure component list for display.
///
/// Exact duplicates are removed, first occurrence wins. If both `docker` and
/// `docker compose` appear (ignoring case), every `docker compose` entry is
/// dropped. No other labels are merged.
#[must_use]
pub fn dedupe_infrastructure(components: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(components.len());
    for component in components {
        if !unique.contains(component) {
            unique.push(component.clone());
        }
    }

    let is = |label: &str, name: &str| label.eq_ignore_ascii_case(name);
    let has_docker = unique.iter().any(|c| is(c, "docker"));
    let has_compose = unique.iter().any(|c| is(c, "docker compose"));
    if has_docker && has_compose {
        unique.retain(|c| !is(c, "docker compose"));
    }
    unique
}
