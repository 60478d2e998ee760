//! In-memory [`Transport`] for tests.
//!
//! Responses are registered per `(method, path)`, where `path` is everything
//! after [`TEST_BASE_URL`], query string included. Every request is recorded
//! so tests can assert which calls were (or were not) issued.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use reqwest::{Method, StatusCode};
use tokio::sync::Semaphore;

use crate::ApiError;
use crate::client::ApiClient;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Base URL used by [`RecordingTransport::client`].
pub const TEST_BASE_URL: &str = "http://ira.test";

#[derive(Debug, Clone)]
enum Canned {
    Reply { status: u16, body: Vec<u8> },
    Fail(String),
}

#[derive(Debug, Clone)]
struct Route {
    outcome: Canned,
    gate: Option<Arc<Semaphore>>,
}

/// Holds a registered response until [`Gate::open`] is called.
#[derive(Debug, Clone)]
pub struct Gate(Arc<Semaphore>);

impl Gate {
    pub fn open(&self) {
        self.0.add_permits(1);
    }
}

#[derive(Debug, Default)]
pub struct RecordingTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Route>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this transport in a client pointed at [`TEST_BASE_URL`].
    #[must_use]
    pub fn client(self) -> ApiClient<Self> {
        ApiClient::with_transport(Some(TEST_BASE_URL), self)
    }

    /// Like [`client`](Self::client), but the caller keeps a handle for
    /// registering more routes and inspecting requests afterwards.
    #[must_use]
    pub fn shared_client(self: &Arc<Self>) -> ApiClient<Arc<Self>> {
        ApiClient::with_transport(Some(TEST_BASE_URL), Arc::clone(self))
    }

    /// Queue a response. When several are queued for one route they are served
    /// in order; the last one keeps being served once the others are used up.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.push(
            method,
            path,
            Route {
                outcome: Canned::Reply {
                    status,
                    body: body.to_string().into_bytes(),
                },
                gate: None,
            },
        );
    }

    pub fn respond_json(&self, method: Method, path: &str, body: serde_json::Value) {
        self.respond(method, path, 200, body);
    }

    /// Queue a response that is only delivered once the returned gate opens.
    pub fn respond_gated(&self, method: Method, path: &str, body: serde_json::Value) -> Gate {
        let semaphore = Arc::new(Semaphore::new(0));
        self.push(
            method,
            path,
            Route {
                outcome: Canned::Reply {
                    status: 200,
                    body: body.to_string().into_bytes(),
                },
                gate: Some(Arc::clone(&semaphore)),
            },
        );
        Gate(semaphore)
    }

    /// Queue a transport-level failure (no HTTP status).
    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.push(
            method,
            path,
            Route {
                outcome: Canned::Fail(message.to_string()),
                gate: None,
            },
        );
    }

    /// Requests sent so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// Paths (relative to [`TEST_BASE_URL`]) of the requests sent so far.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|r| r.url.trim_start_matches(TEST_BASE_URL).to_string())
            .collect()
    }

    fn push(&self, method: Method, path: &str, route: Route) {
        self.routes
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(route);
    }

    fn next_route(&self, method: &Method, path: &str) -> Option<Route> {
        let mut routes = self.routes.lock();
        let queue = routes.get_mut(&(method.clone(), path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let path = request.url.trim_start_matches(TEST_BASE_URL).to_string();
        let method = request.method.clone();
        self.requests.lock().push(request);

        let Some(route) = self.next_route(&method, &path) else {
            return Ok(ApiResponse {
                status: StatusCode::NOT_FOUND,
                body: format!(r#"{{"message": "no route for {method} {path}"}}"#).into_bytes(),
            });
        };

        if let Some(gate) = route.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        match route.outcome {
            Canned::Reply { status, body } => Ok(ApiResponse {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body,
            }),
            Canned::Fail(message) => Err(ApiError::request_failed(None, message)),
        }
    }
}
