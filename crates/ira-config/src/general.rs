//! General dashboard defaults.

use serde::{Deserialize, Serialize};

const fn default_commit_limit() -> u32 {
    20
}

const fn default_snapshot_limit() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Commits requested per history page.
    #[serde(default = "default_commit_limit")]
    pub commit_limit: u32,

    /// Snapshots requested per lifecycle page.
    #[serde(default = "default_snapshot_limit")]
    pub snapshot_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            commit_limit: default_commit_limit(),
            snapshot_limit: default_snapshot_limit(),
        }
    }
}
