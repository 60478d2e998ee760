//! Cross-cutting error types for IRA Observer.
//!
//! Transport errors live in `ira-client` (`ApiError`). This module only covers
//! failures that come from validating payloads after they have been decoded.

use thiserror::Error;

/// Errors raised while validating decoded entities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A versioned payload carried a schema version this build cannot read.
    #[error("Unsupported payload version {found} (supported up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}
