//! Branches, commits and the active branch of one project.
//!
//! Branches and commits are two independent resources: one failing does not
//! blank the other. The active branch is best effort; its failure is logged
//! and leaves the previous value in place.

use ira_client::{CommitQuery, GitService, HttpTransport, Transport};
use ira_core::entities::{GitBranch, GitCommit};
use crate::binding::{Binding, IdentifierSlot};
use crate::resource::{Resource, ResourceState};

#[derive(Debug)]
pub struct GitHook<T = HttpTransport> {
    service: GitService<T>,
    project_id: IdentifierSlot,
    branches: Resource<Vec<GitBranch>>,
    commits: Resource<Vec<GitCommit>>,
    active_branch: Resource<String>,
    default_query: CommitQuery,
}

impl<T: Transport> GitHook<T> {
    pub fn new(service: GitService<T>) -> Self {
        Self::with_commit_query(service, CommitQuery::default())
    }

    /// `query` is used for the automatic fetch and for [`refetch`](Self::refetch).
    pub fn with_commit_query(service: GitService<T>, query: CommitQuery) -> Self {
        Self {
            service,
            project_id: IdentifierSlot::new(),
            branches: Resource::new("Failed to fetch branches"),
            commits: Resource::new("Failed to fetch commits"),
            active_branch: Resource::new("Failed to fetch active branch"),
            default_query: query,
        }
    }

    /// A new id fetches branches, commits and the active branch concurrently.
    pub async fn bind(&self, project_id: Option<&str>) {
        match self.project_id.bind(project_id) {
            Binding::Unchanged => {}
            Binding::Cleared => {
                self.branches.settle_empty();
                self.commits.settle_empty();
                self.active_branch.settle_empty();
            }
            Binding::Changed(id) => {
                tokio::join!(
                    self.fetch_branches(&id),
                    self.fetch_commits(&id, &self.default_query),
                    self.fetch_active_branch(&id),
                );
            }
        }
    }

    pub async fn refetch(&self) {
        if let Some(id) = self.project_id.current() {
            tokio::join!(
                self.fetch_branches(&id),
                self.fetch_commits(&id, &self.default_query),
                self.fetch_active_branch(&id),
            );
        }
    }

    pub async fn refetch_branches(&self) {
        if let Some(id) = self.project_id.current() {
            self.fetch_branches(&id).await;
        }
    }

    /// Re-read commit history with a different window or limit.
    pub async fn refetch_commits(&self, query: &CommitQuery) {
        if let Some(id) = self.project_id.current() {
            self.fetch_commits(&id, query).await;
        }
    }

    async fn fetch_branches(&self, id: &str) {
        self.branches.run(self.service.branches(id)).await;
    }

    async fn fetch_commits(&self, id: &str, query: &CommitQuery) {
        self.commits.run(self.service.commits(id, query)).await;
    }

    async fn fetch_active_branch(&self, id: &str) {
        let round = self.active_branch.begin();
        match self.service.active_branch(id).await {
            Ok(branch) => {
                self.active_branch.finish(round, Ok(branch));
            }
            Err(err) => {
                tracing::warn!(project_id = id, %err, "failed to fetch active branch");
                self.active_branch.abandon(round);
            }
        }
    }

    #[must_use]
    pub fn branches(&self) -> ResourceState<Vec<GitBranch>> {
        self.branches.state()
    }

    #[must_use]
    pub fn commits(&self) -> ResourceState<Vec<GitCommit>> {
        self.commits.state()
    }

    #[must_use]
    pub fn active_branch(&self) -> Option<String> {
        self.active_branch.data()
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

    fn commit(hash: &str) -> serde_json::Value {
        json!({
            "commit_hash": hash,
            "message": "fix: things\n\nbody",
            "author_name": "ana",
            "authored_at": "2025-02-01T12:00:00Z"
        })
    }

    #[tokio::test]
    async fn bind_loads_everything() {
        let transport = RecordingTransport::new();
        transport.respond_json(Method::GET, "/projects/p/git/branches", json!(["main", "dev"]));
        transport.respond_json(
            Method::GET,
            "/projects/p/git/commits?limit=20",
            json!([commit("abcdef1234")]),
        );
        transport.respond_json(Method::GET, "/projects/p/git/branch", json!({"branch": "dev"}));
        let hook = GitHook::new(Services::new(transport.client()).git);

        hook.bind(Some("p")).await;
        let branches = hook.branches().data.unwrap();
        assert_eq!(branches[1].name(), "dev");
        assert_eq!(hook.commits().data.unwrap()[0].short_hash(), "abcdef1");
        assert_eq!(hook.active_branch().as_deref(), Some("dev"));
    }

    #[tokio::test]
    async fn branch_failure_does_not_touch_commits() {
        let transport = RecordingTransport::new();
        transport.respond(Method::GET, "/projects/p/git/branches", 502, json!({}));
        transport.respond_json(
            Method::GET,
            "/projects/p/git/commits?limit=20",
            json!([commit("abc")]),
        );
        transport.fail(Method::GET, "/projects/p/git/branch", "connection reset");
        let hook = GitHook::new(Services::new(transport.client()).git);

        hook.bind(Some("p")).await;
        assert_eq!(
            hook.branches().error.as_deref(),
            Some("API Error: Bad Gateway")
        );
        assert_eq!(hook.commits().error, None);
        assert_eq!(hook.commits().data.unwrap().len(), 1);
        assert_eq!(hook.active_branch(), None);
    }

    #[tokio::test]
    async fn refetch_commits_uses_given_window() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond_json(Method::GET, "/projects/p/git/branches", json!([]));
        transport.respond_json(Method::GET, "/projects/p/git/commits?limit=20", json!([]));
        transport.respond_json(Method::GET, "/projects/p/git/branch", json!({"branch": "main"}));
        transport.respond_json(
            Method::GET,
            "/projects/p/git/commits?limit=50&since=2025-01-01",
            json!([commit("a"), commit("b")]),
        );
        let hook = GitHook::new(Services::new(transport.shared_client()).git);

        hook.bind(Some("p")).await;
        hook.refetch_commits(&CommitQuery {
            limit: 50,
            since: Some("2025-01-01".into()),
            until: None,
        })
        .await;

        assert_eq!(hook.commits().data.unwrap().len(), 2);
        assert_eq!(
            transport.paths().last().map(String::as_str),
            Some("/projects/p/git/commits?limit=50&since=2025-01-01")
        );
    }

    #[tokio::test]
    async fn older_active_branch_round_cannot_overwrite_newer() {
        let transport = RecordingTransport::new();
        let gate = transport.respond_gated(
            Method::GET,
            "/projects/p/git/branch",
            json!({"branch": "old"}),
        );
        transport.respond_json(Method::GET, "/projects/p/git/branch", json!({"branch": "new"}));
        let hook = GitHook::new(Services::new(transport.client()).git);

        let slow = hook.fetch_active_branch("p");
        let fast = async {
            tokio::task::yield_now().await;
            hook.fetch_active_branch("p").await;
            gate.open();
        };
        tokio::join!(slow, fast);

        assert_eq!(hook.active_branch().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn failed_active_branch_keeps_previous_value() {
        let transport = RecordingTransport::new();
        transport.respond_json(Method::GET, "/projects/p/git/branch", json!({"branch": "main"}));
        transport.fail(Method::GET, "/projects/p/git/branch", "connection reset");
        let hook = GitHook::new(Services::new(transport.client()).git);

        hook.fetch_active_branch("p").await;
        hook.fetch_active_branch("p").await;
        assert_eq!(hook.active_branch().as_deref(), Some("main"));
    }

    #[tokio::test]
    async fn unbound_hook_issues_nothing() {
        let transport = Arc::new(RecordingTransport::new());
        let hook = GitHook::new(Services::new(transport.shared_client()).git);

        hook.bind(None).await;
        hook.refetch_commits(&CommitQuery::default()).await;
        assert!(!hook.branches().loading);
        assert!(!hook.commits().loading);
        assert!(transport.requests().is_empty());
    }
}
