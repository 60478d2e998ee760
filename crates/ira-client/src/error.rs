//! Client error type.

use thiserror::Error;

/// The one error kind raised by the HTTP client.
///
/// Transport failures, non-success statuses and undecodable bodies all
/// become [`ApiError::RequestFailed`]; callers read the message and never
/// branch on raw status codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    RequestFailed {
        /// HTTP status, when the failure came from a response.
        status: Option<u16>,
        /// Human-readable message, shown to the user as-is.
        message: String,
    },
}

impl ApiError {
    #[must_use]
    pub fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn transport(error: &reqwest::Error) -> Self {
        Self::request_failed(error.status().map(|s| s.as_u16()), error.to_string())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed { message, .. } => message,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
        }
    }

    /// Whether the backend rejected the caller's credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401) || self.message().contains("401")
    }
}
