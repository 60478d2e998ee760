//! Small closed vocabularies used by the entities.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a project's source tree is ingested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Git,
    Local,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceType {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "git" => Ok(Self::Git),
            "local" => Ok(Self::Local),
            other => Err(crate::CoreError::Validation(format!(
                "unknown source type '{other}' (expected git or local)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_type_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&SourceType::Git).unwrap(), "\"git\"");
        let parsed: SourceType = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(parsed, SourceType::Local);
    }

    #[test]
    fn source_type_from_str_is_case_insensitive() {
        assert_eq!("GIT".parse::<SourceType>().unwrap(), SourceType::Git);
        assert!("svn".parse::<SourceType>().is_err());
    }
}
