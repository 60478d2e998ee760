use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The user embedded in a membership record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MemberUser {
    pub id: String,
    pub display_name: String,
    pub role: String,
    pub is_active: bool,
}

/// A user's membership in a project.
///
/// Revoked memberships are still returned by the backend; hiding them is a
/// view concern.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectMember {
    pub id: String,
    pub user: MemberUser,
    pub role: String,
    #[serde(default)]
    pub revoked_at: Option<DateTime<Utc>>,
}

impl ProjectMember {
    #[must_use]
    pub const fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}
