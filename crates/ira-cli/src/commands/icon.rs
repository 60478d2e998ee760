use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct IconLookup {
    label: String,
    key: String,
    url: String,
}

/// Handle `ira icon`.
pub fn handle(label: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lookup = IconLookup {
        label: label.to_string(),
        key: ira_insight::icon_key(label),
        url: ira_insight::icon_url(label),
    };
    output(&lookup, flags.format)
}
