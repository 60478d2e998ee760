use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A branch name. The backend sends branches as a bare JSON string array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct GitBranch(pub String);

impl GitBranch {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GitBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response from `GET /projects/{id}/git/branch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActiveBranch {
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GitCommit {
    pub commit_hash: String,
    pub message: String,
    pub author_name: String,
    pub authored_at: DateTime<Utc>,
}

impl GitCommit {
    /// First seven characters of the hash.
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.commit_hash
            .char_indices()
            .nth(7)
            .map_or(self.commit_hash.as_str(), |(idx, _)| &self.commit_hash[..idx])
    }

    /// First line of the message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branches_decode_from_string_array() {
        let branches: Vec<GitBranch> = serde_json::from_str(r#"["main", "dev"]"#).unwrap();
        assert_eq!(branches[1].name(), "dev");
    }

    #[test]
    fn short_hash_and_subject() {
        let commit = GitCommit {
            commit_hash: "0123456789abcdef".into(),
            message: "Fix parser\n\nLonger body".into(),
            author_name: "dev".into(),
            authored_at: Utc::now(),
        };
        assert_eq!(commit.short_hash(), "0123456");
        assert_eq!(commit.subject(), "Fix parser");
    }
}
