//! View-model hooks.
//!
//! Each hook owns the `{data, loading, error}` state of one resource and
//! refreshes it when its driving identifier changes ([`ProjectHook::bind`]
//! and friends) or when asked ([`refetch`](ProjectHook::refetch)). Hooks take
//! their service by value, so tests hand them services built over
//! [`RecordingTransport`](ira_client::testing::RecordingTransport).
//!
//! Only the most recently started round of a hook may write its state; a
//! slower, older round that settles afterwards is dropped.

mod analysis;
mod binding;
mod git;
mod projects;
mod resource;
mod snapshots;
mod user;

pub use analysis::{AnalysisData, AnalysisHook, DependenciesHook};
pub use binding::{Binding, IdentifierSlot};
pub use git::GitHook;
pub use projects::{ProjectHook, ProjectMembersHook, ProjectsHook};
pub use resource::{Resource, ResourceState, Round, error_message};
pub use snapshots::SnapshotsHook;
pub use user::UserHook;
