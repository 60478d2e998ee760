//! Typed facades over the backend resources.
//!
//! Each method maps one domain operation to exactly one client call. Services
//! do no caching, aggregation or retrying; client errors propagate unchanged.

mod analysis;
mod git;
mod project;
mod snapshot;
mod user;

pub use analysis::AnalysisService;
pub use git::{CommitQuery, DEFAULT_COMMIT_LIMIT, GitService};
pub use project::ProjectService;
pub use snapshot::{DEFAULT_SNAPSHOT_LIMIT, PageQuery, SnapshotService};
pub use user::UserService;

/// Percent-encode an identifier for use as a path segment.
fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
