//! The JSON HTTP client every service goes through.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use ira_config::{ApiConfig, DEFAULT_BASE_URL};

use crate::error::ApiError;
use crate::http::{check_response, decode_body};
use crate::transport::{ApiRequest, HttpTransport, Transport};

/// Per-call options merged over the client's defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers. A header named here replaces the client's value for the
    /// same name; all other default headers are kept.
    pub headers: HeaderMap,
}

/// JSON client bound to one backend base URL.
///
/// The base URL is resolved once at construction. Every request carries
/// `Content-Type: application/json`, plus the bearer token if one was set.
#[derive(Debug)]
pub struct ApiClient<T = HttpTransport> {
    base_url: String,
    default_headers: HeaderMap,
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Build a reqwest-backed client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP stack fails to initialise or the
    /// configured token is not a valid header value.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Self::with_transport(Some(&config.base_url), HttpTransport::new()?);
        if config.has_token() {
            client.with_bearer_token(config.token.trim())
        } else {
            Ok(client)
        }
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over `transport`. A missing or blank base URL falls back
    /// to [`DEFAULT_BASE_URL`].
    pub fn with_transport(base_url: Option<&str>, transport: T) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            base_url,
            default_headers,
            transport,
        }
    }

    /// Attach `Authorization: Bearer <token>` to every request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the token contains characters not allowed in
    /// a header value.
    pub fn with_bearer_token(mut self, token: &str) -> Result<Self, ApiError> {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ApiError::request_failed(None, format!("invalid API token: {e}")))?;
        self.default_headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] on transport failure, non-success
    /// status, or an undecodable body.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(Method::GET, path, None, RequestOptions::default())
            .await
    }

    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn post<R, B>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body), RequestOptions::default())
            .await
    }

    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn put<R, B>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body), RequestOptions::default())
            .await
    }

    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(Method::DELETE, path, None, RequestOptions::default())
            .await
    }

    /// Issue one request and decode its JSON body as `R`.
    ///
    /// `path` is appended to the base URL verbatim and must start with `/`.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn request<R, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| ApiError::request_failed(None, format!("invalid request body: {e}")))?;

        let mut headers = self.default_headers.clone();
        headers.extend(options.headers);

        let request = ApiRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers,
            body,
        };
        tracing::debug!(method = %request.method, url = %request.url, "api request");

        let resp = check_response(self.transport.send(request).await?)?;
        decode_body(&resp)
    }
}
