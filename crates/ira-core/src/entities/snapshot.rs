//! Snapshots and their versioned summary payload.
//!
//! The backend stores an arbitrary JSON object per snapshot. It is decoded
//! into a [`SnapshotSummary`] envelope: the object must be a JSON object and
//! its `v` field (defaulting to 1 when absent) must be a version this build
//! understands. Anything else is rejected while decoding.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::CoreError;

/// Highest summary schema version this build reads.
pub const SUMMARY_VERSION: u32 = 1;

const VERSION_KEY: &str = "v";

/// Opaque, versioned analysis summary attached to a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct SnapshotSummary {
    version: u32,
    body: Map<String, Value>,
}

impl SnapshotSummary {
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// The summary fields, without the version tag.
    #[must_use]
    pub const fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }
}

impl Default for SnapshotSummary {
    fn default() -> Self {
        Self {
            version: SUMMARY_VERSION,
            body: Map::new(),
        }
    }
}

impl TryFrom<Value> for SnapshotSummary {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut body = match value {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(CoreError::Validation(format!(
                    "snapshot summary must be a JSON object, got {other}"
                )));
            }
        };

        let version = match body.remove(VERSION_KEY) {
            None => 1,
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| {
                    CoreError::Validation(format!("invalid snapshot summary version {n}"))
                })?,
            Some(other) => {
                return Err(CoreError::Validation(format!(
                    "snapshot summary version must be a number, got {other}"
                )));
            }
        };

        if version == 0 || version > SUMMARY_VERSION {
            return Err(CoreError::UnsupportedVersion {
                found: version,
                supported: SUMMARY_VERSION,
            });
        }

        Ok(Self { version, body })
    }
}

impl From<SnapshotSummary> for Value {
    fn from(summary: SnapshotSummary) -> Self {
        let mut body = summary.body;
        body.insert(VERSION_KEY.to_string(), Value::from(summary.version));
        Self::Object(body)
    }
}

impl JsonSchema for SnapshotSummary {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "SnapshotSummary".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <std::collections::BTreeMap<String, Value> as JsonSchema>::json_schema(generator)
    }
}

/// A point-in-time analysis of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Snapshot {
    pub id: String,
    pub project_id: String,
    pub commit_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, rename = "summary_json")]
    pub summary: SnapshotSummary,
}

/// Response from `GET /projects/{id}/snapshots/compact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotPage {
    pub items: Vec<Snapshot>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}
