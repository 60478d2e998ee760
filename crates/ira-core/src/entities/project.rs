use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SourceType;

/// A repository analysis tracked by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub source_type: SourceType,
    /// Clone URL for `git` sources, a path for `local` ones.
    pub source_ref: String,
    pub created_at: DateTime<Utc>,
    pub last_analysis_at: Option<DateTime<Utc>>,
}

impl Project {
    /// `last_analysis_at`, when present, must not precede `created_at`.
    #[must_use]
    pub fn has_consistent_timestamps(&self) -> bool {
        self.last_analysis_at
            .is_none_or(|analysed| analysed >= self.created_at)
    }
}

/// Payload for `POST /projects`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source_type: SourceType,
    pub source_ref: String,
}

/// Partial payload for `PUT /projects/{id}`. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
}

impl ProjectUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.source_type.is_none()
            && self.source_ref.is_none()
    }
}
