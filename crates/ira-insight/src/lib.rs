//! Pure reshaping of analysis payloads for display.
//!
//! Nothing here performs I/O. Inputs are the values the hooks in `ira-views`
//! hold; outputs are the sorted, grouped and formatted shapes pages render.

mod dependencies;
mod export;
mod icons;
mod infrastructure;
mod overview;
mod ranking;
mod views;

pub use dependencies::group_by_source_file;
pub use export::{DependencyExport, ExportFormat, export_dependencies, slugify};
pub use icons::{icon_key, icon_url};
pub use infrastructure::dedupe_infrastructure;
pub use overview::{Technology, TechnologyOverview};
pub use ranking::{
    LanguageShare, Ranked, format_share, language_shares, percentage, rank, rank_by_value,
    total_lines,
};
pub use views::{current_members, filter_endpoints, newest_first};

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}
