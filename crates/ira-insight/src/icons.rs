//! Devicon lookup for language, framework and infrastructure labels.

const ICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

const ICON_TABLE: &[(&str, &str)] = &[
    ("c#", "csharp"),
    ("c++", "cplusplus"),
    ("next.js", "nextjs"),
    ("nextjs", "nextjs"),
    ("node.js", "nodejs"),
    ("nodejs", "nodejs"),
    ("react", "react"),
    ("vue", "vuejs"),
    ("angular", "angularjs"),
    ("go", "go"),
    ("golang", "go"),
    ("docker", "docker"),
    ("docker compose", "docker"),
    ("kubernetes", "kubernetes"),
    ("fastapi", "fastapi"),
    ("python", "python"),
    ("typescript", "typescript"),
    ("javascript", "javascript"),
    ("astro", "astro"),
];

fn lookup(key: &str) -> Option<&'static str> {
    ICON_TABLE
        .iter()
        .find_map(|(label, icon)| (*label == key).then_some(*icon))
}

/// Canonical icon key for `label`.
///
/// The lowercased label is looked up first, then the lowercased label with
/// spaces and periods removed; with no table hit that stripped form is the key.
#[must_use]
pub fn icon_key(label: &str) -> String {
    let lower = label.trim().to_lowercase();
    let stripped: String = lower.chars().filter(|c| *c != ' ' && *c != '.').collect();
    lookup(&lower)
        .or_else(|| lookup(&stripped))
        .map_or(stripped, str::to_string)
}

#[must_use]
pub fn icon_url(label: &str) -> String {
    let key = icon_key(label);
    format!("{ICON_BASE}/{key}/{key}-original.svg")
}
