use std::sync::Arc;

use ira_core::entities::SnapshotPage;

use super::segment;
use crate::http::Query;
use crate::transport::{HttpTransport, Transport};
use crate::{ApiClient, ApiError};

/// Snapshots requested per page when the caller does not say otherwise.
pub const DEFAULT_SNAPSHOT_LIMIT: u32 = 100;

/// `limit`/`offset` pass-through paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: u32,
    pub offset: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SNAPSHOT_LIMIT,
            offset: 0,
        }
    }
}

/// `/projects/{id}/snapshots` resource family.
#[derive(Debug)]
pub struct SnapshotService<T = HttpTransport> {
    client: Arc<ApiClient<T>>,
}

impl<T> Clone for SnapshotService<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: Transport> SnapshotService<T> {
    pub const fn new(client: Arc<ApiClient<T>>) -> Self {
        Self { client }
    }

    /// `GET /projects/{id}/snapshots/compact?limit&offset`
    ///
    /// Summaries are validated while decoding; an unreadable summary fails
    /// the whole call.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn compact(
        &self,
        project_id: &str,
        page: PageQuery,
    ) -> Result<SnapshotPage, ApiError> {
        let path = Query::new()
            .param("limit", page.limit)
            .param("offset", page.offset)
            .apply(&format!("/projects/{}/snapshots/compact", segment(project_id)));
        self.client.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn compact_sends_paging() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::GET,
            "/projects/p/snapshots/compact?limit=100&offset=0",
            json!({"items": [], "total": 0, "limit": 100, "offset": 0}),
        );
        let service = SnapshotService::new(Arc::new(transport.client()));

        let page = service.compact("p", PageQuery::default()).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn unsupported_summary_version_fails_at_boundary() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::GET,
            "/projects/p/snapshots/compact?limit=10&offset=20",
            json!({
                "items": [{
                    "id": "s-1",
                    "project_id": "p",
                    "commit_hash": null,
                    "created_at": "2025-05-01T10:00:00Z",
                    "summary_json": {"v": 99}
                }],
                "total": 21, "limit": 10, "offset": 20
            }),
        );
        let service = SnapshotService::new(Arc::new(transport.client()));

        let err = service
            .compact("p", PageQuery { limit: 10, offset: 20 })
            .await
            .unwrap_err();
        assert!(err.message().contains("Unsupported payload version 99"));
    }
}
