//! Entity structs for the projections served by the IRA backend.
//!
//! Every entity is a read-only value: hooks replace whole values on refetch and
//! never mutate them in place. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema` for JSON roundtrip and schema validation.

mod analysis;
mod git;
mod member;
mod project;
mod snapshot;
mod user;

pub use analysis::{
    ApiEndpoint, Dependency, DependencyAnalysis, EndpointAnalysis, FrameworkAnalysis,
    FrameworksMap, InfrastructureAnalysis, LanguageAnalysis, LanguagesMap,
};
pub use git::{ActiveBranch, GitBranch, GitCommit};
pub use member::{MemberUser, ProjectMember};
pub use project::{Project, ProjectCreate, ProjectUpdate};
pub use snapshot::{Snapshot, SnapshotPage, SnapshotSummary, SUMMARY_VERSION};
pub use user::{AuthToken, Credentials, ProfileUpdate, User};
