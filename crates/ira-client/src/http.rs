//! Shared HTTP response helpers.
//!
//! Centralizes status checks (non-success -> [`ApiError::RequestFailed`] with
//! the backend's `message` when it sent one) and body decoding so the client
//! and services stay focused on request construction.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::transport::ApiResponse;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Check a response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise the error message is
/// the JSON body's `message` field, falling back to `API Error: <reason>`.
pub fn check_response(resp: ApiResponse) -> Result<ApiResponse, ApiError> {
    if resp.status.is_success() {
        return Ok(resp);
    }

    let message = serde_json::from_slice::<ErrorBody>(&resp.body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| match resp.status.canonical_reason() {
            Some(reason) => format!("API Error: {reason}"),
            None => format!("API Error: {}", resp.status.as_str()),
        });

    Err(ApiError::request_failed(Some(resp.status.as_u16()), message))
}

/// Decode a success body. An empty body decodes as JSON `null` so endpoints
/// answering `204 No Content` can be read as `()`.
pub fn decode_body<R: DeserializeOwned>(resp: &ApiResponse) -> Result<R, ApiError> {
    let body: &[u8] = if resp.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &resp.body
    };
    serde_json::from_slice(body).map_err(|e| {
        ApiError::request_failed(
            Some(resp.status.as_u16()),
            format!("invalid response body: {e}"),
        )
    })
}

/// Query-string builder. Optional parameters are omitted rather than sent empty.
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    #[must_use]
    pub fn optional(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.param(key, v),
            _ => self,
        }
    }

    /// Append the encoded query to `path`.
    #[must_use]
    pub fn apply(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let encoded = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{encoded}")
    }
}
