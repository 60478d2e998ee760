use std::sync::Arc;

use ira_core::entities::{Project, ProjectCreate, ProjectMember, ProjectUpdate};

use super::segment;
use crate::transport::{HttpTransport, Transport};
use crate::{ApiClient, ApiError};

/// `/projects` resource family.
#[derive(Debug)]
pub struct ProjectService<T = HttpTransport> {
    client: Arc<ApiClient<T>>,
}

impl<T> Clone for ProjectService<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: Transport> ProjectService<T> {
    pub const fn new(client: Arc<ApiClient<T>>) -> Self {
        Self { client }
    }

    /// `GET /projects`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get("/projects").await
    }

    /// `GET /projects/{id}`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn get(&self, id: &str) -> Result<Project, ApiError> {
        self.client.get(&format!("/projects/{}", segment(id))).await
    }

    /// `POST /projects`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn create(&self, project: &ProjectCreate) -> Result<Project, ApiError> {
        self.client.post("/projects", project).await
    }

    /// `PUT /projects/{id}`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn update(&self, id: &str, changes: &ProjectUpdate) -> Result<Project, ApiError> {
        self.client
            .put(&format!("/projects/{}", segment(id)), changes)
            .await
    }

    /// `DELETE /projects/{id}`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete::<serde::de::IgnoredAny>(&format!("/projects/{}", segment(id)))
            .await
            .map(|_| ())
    }

    /// `GET /projects/{id}/members`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn members(&self, id: &str) -> Result<Vec<ProjectMember>, ApiError> {
        self.client
            .get(&format!("/projects/{}/members", segment(id)))
            .await
    }
}
