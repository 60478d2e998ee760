//! Backend API connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Backend address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Scheme + host (+ optional path prefix) every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request when non-empty.
    #[serde(default)]
    pub token: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Check that `base_url` is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming `api.base_url`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        let has_host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if has_host {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("'{url}' is not an http:// or https:// URL"),
            })
        }
    }
}
