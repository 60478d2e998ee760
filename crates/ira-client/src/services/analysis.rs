use std::sync::Arc;

use ira_core::entities::{
    ApiEndpoint, Dependency, DependencyAnalysis, EndpointAnalysis, FrameworkAnalysis,
    FrameworksMap, InfrastructureAnalysis, LanguageAnalysis, LanguagesMap,
};

use super::segment;
use crate::transport::{HttpTransport, Transport};
use crate::{ApiClient, ApiError};

/// `/projects/{id}/analysis/*` resource family. Each method unwraps the
/// backend's one-field envelope.
#[derive(Debug)]
pub struct AnalysisService<T = HttpTransport> {
    client: Arc<ApiClient<T>>,
}

impl<T> Clone for AnalysisService<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: Transport> AnalysisService<T> {
    pub const fn new(client: Arc<ApiClient<T>>) -> Self {
        Self { client }
    }

    fn path(project_id: &str, resource: &str) -> String {
        format!("/projects/{}/analysis/{resource}", segment(project_id))
    }

    /// `GET /projects/{id}/analysis/languages`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn languages(&self, project_id: &str) -> Result<LanguagesMap, ApiError> {
        let analysis: LanguageAnalysis = self
            .client
            .get(&Self::path(project_id, "languages"))
            .await?;
        Ok(analysis.languages)
    }

    /// `POST /projects/{id}/analysis/frameworks` with an empty object body;
    /// the backend re-runs detection and returns the scores.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn frameworks(&self, project_id: &str) -> Result<FrameworksMap, ApiError> {
        let analysis: FrameworkAnalysis = self
            .client
            .post(
                &Self::path(project_id, "frameworks"),
                &serde_json::Map::new(),
            )
            .await?;
        Ok(analysis.frameworks)
    }

    /// `GET /projects/{id}/analysis/infrastructure`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn infrastructure(&self, project_id: &str) -> Result<Vec<String>, ApiError> {
        let analysis: InfrastructureAnalysis = self
            .client
            .get(&Self::path(project_id, "infrastructure"))
            .await?;
        Ok(analysis.components)
    }

    /// `GET /projects/{id}/analysis/endpoints`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn endpoints(&self, project_id: &str) -> Result<Vec<ApiEndpoint>, ApiError> {
        let analysis: EndpointAnalysis = self
            .client
            .get(&Self::path(project_id, "endpoints"))
            .await?;
        Ok(analysis.endpoints)
    }

    /// `GET /projects/{id}/analysis/dependencies`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn dependencies(&self, project_id: &str) -> Result<Vec<Dependency>, ApiError> {
        let analysis: DependencyAnalysis = self
            .client
            .get(&Self::path(project_id, "dependencies"))
            .await?;
        Ok(analysis.dependencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn frameworks_are_posted_with_empty_object() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::POST,
            "/projects/p/analysis/frameworks",
            json!({"frameworks": {"FastAPI": 0.9}}),
        );
        let service = AnalysisService::new(Arc::new(transport.client()));

        let frameworks = service.frameworks("p").await.unwrap();
        assert_eq!(frameworks.get("FastAPI"), Some(&0.9));

        let sent = service.client.transport().requests();
        assert_eq!(sent[0].body.as_deref(), Some(b"{}".as_slice()));
    }

    #[tokio::test]
    async fn infrastructure_unwraps_components() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::GET,
            "/projects/p/analysis/infrastructure",
            json!({"components": ["Docker", "Kubernetes"]}),
        );
        let service = AnalysisService::new(Arc::new(transport.client()));

        assert_eq!(
            service.infrastructure("p").await.unwrap(),
            vec!["Docker".to_string(), "Kubernetes".to_string()]
        );
    }

    #[tokio::test]
    async fn wrong_envelope_is_request_failed() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::GET,
            "/projects/p/analysis/languages",
            json!({"langs": {}}),
        );
        let service = AnalysisService::new(Arc::new(transport.client()));

        let err = service.languages("p").await.unwrap_err();
        assert!(err.message().starts_with("invalid response body"));
    }
}
