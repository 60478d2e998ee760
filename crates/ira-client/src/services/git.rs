use std::sync::Arc;

use ira_core::entities::{ActiveBranch, GitBranch, GitCommit};

use super::segment;
use crate::http::Query;
use crate::transport::{HttpTransport, Transport};
use crate::{ApiClient, ApiError};

/// Commits requested when the caller does not say otherwise.
pub const DEFAULT_COMMIT_LIMIT: u32 = 20;

/// Filters for the commit history endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitQuery {
    pub limit: u32,
    /// Lower bound on `authored_at`, passed through as given.
    pub since: Option<String>,
    pub until: Option<String>,
}

impl Default for CommitQuery {
    fn default() -> Self {
        Self::with_limit(DEFAULT_COMMIT_LIMIT)
    }
}

impl CommitQuery {
    #[must_use]
    pub const fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            since: None,
            until: None,
        }
    }
}

/// `/projects/{id}/git/*` resource family.
#[derive(Debug)]
pub struct GitService<T = HttpTransport> {
    client: Arc<ApiClient<T>>,
}

impl<T> Clone for GitService<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: Transport> GitService<T> {
    pub const fn new(client: Arc<ApiClient<T>>) -> Self {
        Self { client }
    }

    /// `GET /projects/{id}/git/branches`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn branches(&self, project_id: &str) -> Result<Vec<GitBranch>, ApiError> {
        self.client
            .get(&format!("/projects/{}/git/branches", segment(project_id)))
            .await
    }

    /// `GET /projects/{id}/git/commits?limit&since&until`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn commits(
        &self,
        project_id: &str,
        query: &CommitQuery,
    ) -> Result<Vec<GitCommit>, ApiError> {
        let path = Query::new()
            .param("limit", query.limit)
            .optional("since", query.since.as_deref())
            .optional("until", query.until.as_deref())
            .apply(&format!("/projects/{}/git/commits", segment(project_id)));
        self.client.get(&path).await
    }

    /// `GET /projects/{id}/git/branch`, unwrapped to the branch name.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn active_branch(&self, project_id: &str) -> Result<String, ApiError> {
        let active: ActiveBranch = self
            .client
            .get(&format!("/projects/{}/git/branch", segment(project_id)))
            .await?;
        Ok(active.branch)
    }
}
