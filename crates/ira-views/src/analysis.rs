//! Technology analysis of one project.

use ira_client::{AnalysisService, HttpTransport, Transport};
use ira_core::entities::{ApiEndpoint, Dependency, FrameworksMap, LanguagesMap};

use crate::binding::{Binding, IdentifierSlot};
use crate::resource::{Resource, ResourceState};

/// Everything one analysis round produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisData {
    pub languages: LanguagesMap,
    pub frameworks: FrameworksMap,
    pub infrastructure: Vec<String>,
    pub endpoints: Vec<ApiEndpoint>,
}

/// Languages, frameworks, infrastructure and endpoints, fetched concurrently.
///
/// A round is all or nothing: if any of the four requests fails, the round's
/// error is stored and none of the other three results are applied.
#[derive(Debug)]
pub struct AnalysisHook<T = HttpTransport> {
    service: AnalysisService<T>,
    project_id: IdentifierSlot,
    analysis: Resource<AnalysisData>,
}

impl<T: Transport> AnalysisHook<T> {
    pub fn new(service: AnalysisService<T>) -> Self {
        Self {
            service,
            project_id: IdentifierSlot::new(),
            analysis: Resource::new("Failed to fetch analysis data"),
        }
    }

    pub async fn bind(&self, project_id: Option<&str>) {
        match self.project_id.bind(project_id) {
            Binding::Unchanged => {}
            Binding::Cleared => self.analysis.settle_empty(),
            Binding::Changed(id) => self.fetch(&id).await,
        }
    }

    pub async fn refetch(&self) {
        if let Some(id) = self.project_id.current() {
            self.fetch(&id).await;
        }
    }

    async fn fetch(&self, id: &str) {
        self.analysis
            .run(async {
                let (languages, frameworks, infrastructure, endpoints) = tokio::try_join!(
                    self.service.languages(id),
                    self.service.frameworks(id),
                    self.service.infrastructure(id),
                    self.service.endpoints(id),
                )?;
                Ok::<_, anyhow::Error>(AnalysisData {
                    languages,
                    frameworks,
                    infrastructure,
                    endpoints,
                })
            })
            .await;
    }

    #[must_use]
    pub fn state(&self) -> ResourceState<AnalysisData> {
        self.analysis.state()
    }
}

/// Flat dependency list of one project. Grouping is done by the caller.
#[derive(Debug)]
pub struct DependenciesHook<T = HttpTransport> {
    service: AnalysisService<T>,
    project_id: IdentifierSlot,
    dependencies: Resource<Vec<Dependency>>,
}

impl<T: Transport> DependenciesHook<T> {
    pub fn new(service: AnalysisService<T>) -> Self {
        Self {
            service,
            project_id: IdentifierSlot::new(),
            dependencies: Resource::new("Failed to fetch dependencies"),
        }
    }

    pub async fn bind(&self, project_id: Option<&str>) {
        match self.project_id.bind(project_id) {
            Binding::Unchanged => {}
            Binding::Cleared => self.dependencies.settle_empty(),
            Binding::Changed(id) => self.fetch(&id).await,
        }
    }

    pub async fn refetch(&self) {
        if let Some(id) = self.project_id.current() {
            self.fetch(&id).await;
        }
    }

    async fn fetch(&self, id: &str) {
        self.dependencies.run(self.service.dependencies(id)).await;
    }

    #[must_use]
    pub fn state(&self) -> ResourceState<Vec<Dependency>> {
        self.dependencies.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ira_client::Services;
    use ira_client::testing::RecordingTransport;
    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::Arc;

    fn register_round(transport: &RecordingTransport, python_lines: u64) {
        transport.respond_json(
            Method::GET,
            "/projects/p/analysis/languages",
            json!({"languages": {"Python": python_lines, "Shell": 10}}),
        );
        transport.respond_json(
            Method::POST,
            "/projects/p/analysis/frameworks",
            json!({"frameworks": {"FastAPI": 0.92}}),
        );
        transport.respond_json(
            Method::GET,
            "/projects/p/analysis/infrastructure",
            json!({"components": ["Docker"]}),
        );
        transport.respond_json(
            Method::GET,
            "/projects/p/analysis/endpoints",
            json!({"endpoints": [{
                "http_method": "GET",
                "path": "/health",
                "framework": "FastAPI",
                "language": "Python",
                "source_file": "app/main.py",
                "source_symbol": "health",
                "confidence": 0.99
            }]}),
        );
    }

    #[tokio::test]
    async fn round_combines_four_requests() {
        let transport = RecordingTransport::new();
        register_round(&transport, 900);
        let hook = AnalysisHook::new(Services::new(transport.client()).analysis);

        hook.bind(Some("p")).await;
        let state = hook.state();
        assert!(!state.loading);
        let data = state.data.unwrap();
        assert_eq!(data.languages.get("Python"), Some(&900));
        assert_eq!(data.frameworks.get("FastAPI"), Some(&0.92));
        assert_eq!(data.infrastructure, vec!["Docker".to_string()]);
        assert_eq!(data.endpoints[0].path, "/health");
    }

    #[tokio::test]
    async fn partial_failure_applies_nothing() {
        let transport = RecordingTransport::new();
        register_round(&transport, 900);
        // Second round: languages would change, but frameworks fails.
        transport.respond_json(
            Method::GET,
            "/projects/p/analysis/languages",
            json!({"languages": {"Python": 1200}}),
        );
        transport.respond(
            Method::POST,
            "/projects/p/analysis/frameworks",
            500,
            json!({"message": "detector crashed"}),
        );
        let hook = AnalysisHook::new(Services::new(transport.client()).analysis);

        hook.bind(Some("p")).await;
        assert_eq!(hook.state().error, None);
        hook.refetch().await;

        let state = hook.state();
        assert_eq!(state.error.as_deref(), Some("detector crashed"));
        assert!(!state.loading);
        let data = state.data.unwrap();
        assert_eq!(data.languages.get("Python"), Some(&900));
        assert_eq!(data.languages.len(), 2);
    }

    #[tokio::test]
    async fn undefined_id_issues_no_request() {
        let transport = Arc::new(RecordingTransport::new());
        let services = Services::new(transport.shared_client());
        let analysis = AnalysisHook::new(services.analysis.clone());
        let dependencies = DependenciesHook::new(services.analysis);

        analysis.bind(None).await;
        dependencies.bind(None).await;

        assert_eq!(analysis.state().data, None);
        assert!(!analysis.state().loading);
        assert_eq!(dependencies.state().error, None);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn dependencies_keep_backend_order() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::GET,
            "/projects/p/analysis/dependencies",
            json!({"dependencies": [
                {"name": "react", "version": "18.2.0", "ecosystem": "npm", "scope": "runtime", "source_file": "package.json"},
                {"name": "flask", "version": "2.0", "ecosystem": "pypi", "scope": "runtime", "source_file": "requirements.txt"}
            ]}),
        );
        let hook = DependenciesHook::new(Services::new(transport.client()).analysis);

        hook.bind(Some("p")).await;
        let names: Vec<_> = hook
            .state()
            .data
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["react", "flask"]);
    }
}
