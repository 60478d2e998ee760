//! The network seam.
//!
//! [`ApiClient`](crate::ApiClient) builds fully resolved requests and hands
//! them to a [`Transport`]. Production code uses [`HttpTransport`] (reqwest);
//! tests substitute [`RecordingTransport`](crate::testing::RecordingTransport).

use std::future::Future;
use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

use crate::ApiError;

/// A request ready to go on the wire.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw status and body of a completed exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Performs one HTTP exchange. Implementations must not retry.
pub trait Transport: Send + Sync {
    /// Send `request` and return the response whatever its status.
    ///
    /// Only failures to complete the exchange (DNS, connect, reset) are
    /// errors here; status handling belongs to the client.
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>> + Send {
        (**self).send(request)
    }
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ira/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::transport(&e))?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| ApiError::transport(&e))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ApiError::transport(&e))?
            .to_vec();
        Ok(ApiResponse { status, body })
    }
}
