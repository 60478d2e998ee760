//! # ira-config
//!
//! Layered configuration loading for IRA Observer using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IRA_*` prefix, `__` as separator)
//! 2. Project-level `.ira/config.toml`
//! 3. User-level `~/.config/ira/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `IRA_API__BASE_URL` -> `api.base_url`,
//! `IRA_GENERAL__COMMIT_LIMIT` -> `general.commit_limit`, etc.
//! The backend address is selected by the single variable `IRA_API__BASE_URL`
//! and falls back to `http://localhost:8000`.
//!
//! # Usage
//!
//! ```no_run
//! use ira_config::IraConfig;
//!
//! let config = IraConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IraConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl IraConfig {
    /// Resolve defaults, both TOML files and `IRA_*` variables, then validate
    /// the API section. A `.env` file is only read by [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or the resolved API
    /// settings are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// [`Self::load`] after exporting the variables of `./.env`, if present.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(ConfigError::Dotenv(err.to_string()));
            }
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".ira/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("IRA_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ira").join("config.toml"))
    }
}
