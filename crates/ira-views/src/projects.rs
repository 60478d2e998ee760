//! Hooks for the project list, a single project and its members.

use ira_client::{HttpTransport, ProjectService, Transport};
use ira_core::entities::{Project, ProjectMember};

use crate::binding::{Binding, IdentifierSlot};
use crate::resource::{Resource, ResourceState};

/// All projects visible to the current user.
#[derive(Debug)]
pub struct ProjectsHook<T = HttpTransport> {
    service: ProjectService<T>,
    projects: Resource<Vec<Project>>,
}

impl<T: Transport> ProjectsHook<T> {
    pub const fn new(service: ProjectService<T>) -> Self {
        Self {
            service,
            projects: Resource::new("Failed to fetch projects"),
        }
    }

    /// Mount: the list has no driving identifier, so this always fetches.
    pub async fn load(&self) {
        self.refetch().await;
    }

    pub async fn refetch(&self) {
        self.projects.run(self.service.list()).await;
    }

    #[must_use]
    pub fn state(&self) -> ResourceState<Vec<Project>> {
        self.projects.state()
    }
}

/// One project, driven by its id.
#[derive(Debug)]
pub struct ProjectHook<T = HttpTransport> {
    service: ProjectService<T>,
    project_id: IdentifierSlot,
    project: Resource<Project>,
}

impl<T: Transport> ProjectHook<T> {
    pub fn new(service: ProjectService<T>) -> Self {
        Self {
            service,
            project_id: IdentifierSlot::new(),
            project: Resource::new("Failed to fetch project"),
        }
    }

    /// Point the hook at `project_id`. A new id starts a round; `None` settles
    /// the hook empty without a request.
    pub async fn bind(&self, project_id: Option<&str>) {
        match self.project_id.bind(project_id) {
            Binding::Unchanged => {}
            Binding::Cleared => self.project.settle_empty(),
            Binding::Changed(id) => self.fetch(&id).await,
        }
    }

    /// Re-run the round for the bound id. No-op while unbound.
    pub async fn refetch(&self) {
        if let Some(id) = self.project_id.current() {
            self.fetch(&id).await;
        }
    }

    async fn fetch(&self, id: &str) {
        self.project.run(self.service.get(id)).await;
    }

    #[must_use]
    pub fn state(&self) -> ResourceState<Project> {
        self.project.state()
    }
}

/// Members of one project, revoked ones included; filtering is left to the view.
#[derive(Debug)]
pub struct ProjectMembersHook<T = HttpTransport> {
    service: ProjectService<T>,
    project_id: IdentifierSlot,
    members: Resource<Vec<ProjectMember>>,
}

impl<T: Transport> ProjectMembersHook<T> {
    pub fn new(service: ProjectService<T>) -> Self {
        Self {
            service,
            project_id: IdentifierSlot::new(),
            members: Resource::new("Failed to fetch project members"),
        }
    }

    pub async fn bind(&self, project_id: Option<&str>) {
        match self.project_id.bind(project_id) {
            Binding::Unchanged => {}
            Binding::Cleared => self.members.settle_empty(),
            Binding::Changed(id) => self.fetch(&id).await,
        }
    }

    pub async fn refetch(&self) {
        if let Some(id) = self.project_id.current() {
            self.fetch(&id).await;
        }
    }

    async fn fetch(&self, id: &str) {
        self.members.run(self.service.members(id)).await;
    }

    #[must_use]
    pub fn state(&self) -> ResourceState<Vec<ProjectMember>> {
        self.members.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ira_client::Services;
    use ira_client::testing::RecordingTransport;
    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn project(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "description": null,
            "source_type": "git",
            "source_ref": "https://example.com/repo.git",
            "created_at": "2025-01-01T00:00:00Z",
            "last_analysis_at": null
        })
    }

    fn hook(transport: RecordingTransport) -> ProjectHook<RecordingTransport> {
        ProjectHook::new(Services::new(transport.client()).projects)
    }

    #[tokio::test]
    async fn list_loads_projects() {
        let transport = RecordingTransport::new();
        transport.respond_json(Method::GET, "/projects", json!([project("p-1", "ira")]));
        let hook = ProjectsHook::new(Services::new(transport.client()).projects);
        assert!(hook.state().loading);

        hook.load().await;
        let state = hook.state();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.data.unwrap()[0].name, "ira");
    }

    #[tokio::test]
    async fn list_failure_keeps_backend_message() {
        let transport = RecordingTransport::new();
        transport.respond(Method::GET, "/projects", 500, json!({"message": "db down"}));
        let hook = ProjectsHook::new(Services::new(transport.client()).projects);

        hook.load().await;
        assert_eq!(hook.state().error.as_deref(), Some("db down"));
    }

    #[tokio::test]
    async fn undefined_id_settles_without_request() {
        let transport = Arc::new(RecordingTransport::new());
        let services = Services::new(transport.shared_client());
        let hook = ProjectHook::new(services.projects.clone());

        hook.bind(None).await;
        let state = hook.state();
        assert!(!state.loading);
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);

        let members = ProjectMembersHook::new(services.projects);
        members.bind(None).await;
        members.refetch().await;
        assert!(!members.state().loading);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn same_id_does_not_refetch_but_refetch_does() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond_json(Method::GET, "/projects/p-1", project("p-1", "ira"));
        let hook = ProjectHook::new(Services::new(transport.shared_client()).projects);

        hook.bind(Some("p-1")).await;
        hook.bind(Some("p-1")).await;
        assert_eq!(transport.paths(), vec!["/projects/p-1"]);

        hook.refetch().await;
        assert_eq!(transport.paths().len(), 2);
        assert_eq!(hook.state().data.unwrap().id, "p-1");
    }

    #[tokio::test]
    async fn late_result_for_previous_id_is_discarded() {
        let transport = RecordingTransport::new();
        let gate = transport.respond_gated(Method::GET, "/projects/a", project("a", "slow"));
        transport.respond_json(Method::GET, "/projects/b", project("b", "fast"));
        let hook = hook(transport);

        let slow = hook.bind(Some("a"));
        let fast = async {
            tokio::task::yield_now().await;
            hook.bind(Some("b")).await;
            gate.open();
        };
        tokio::join!(slow, fast);

        let state = hook.state();
        assert!(!state.loading);
        assert_eq!(state.data.unwrap().name, "fast");
    }

    #[tokio::test]
    async fn clearing_id_drops_in_flight_round() {
        let transport = RecordingTransport::new();
        let gate = transport.respond_gated(Method::GET, "/projects/a", project("a", "late"));
        let hook = hook(transport);

        let slow = hook.bind(Some("a"));
        let clear = async {
            tokio::task::yield_now().await;
            hook.bind(None).await;
            gate.open();
        };
        tokio::join!(slow, clear);

        let state = hook.state();
        assert_eq!(state.data, None);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn members_include_revoked() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::GET,
            "/projects/p/members",
            json!([
                {
                    "id": "m-1",
                    "user": {"id": "u-1", "display_name": "ana", "role": "admin", "is_active": true},
                    "role": "owner",
                    "revoked_at": null
                },
                {
                    "id": "m-2",
                    "user": {"id": "u-2", "display_name": "bo", "role": "reader", "is_active": false},
                    "role": "viewer",
                    "revoked_at": "2025-03-01T00:00:00Z"
                }
            ]),
        );
        let hook = ProjectMembersHook::new(Services::new(transport.client()).projects);

        hook.bind(Some("p")).await;
        let members = hook.state().data.unwrap();
        assert_eq!(members.len(), 2);
        assert!(members[1].is_revoked());
    }
}
