//! Backend access for IRA Observer.
//!
//! [`ApiClient`] owns the base URL, default headers and the [`Transport`] that
//! actually moves bytes. Resource services ([`ProjectService`],
//! [`GitService`], [`AnalysisService`], [`SnapshotService`],
//! [`UserService`]) share one client through an [`Arc`] and map each backend
//! route to a typed method. Every failure is an [`ApiError`].

mod client;
mod error;
mod http;
pub mod services;
pub mod testing;
mod transport;

use std::sync::Arc;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
pub use http::Query;
pub use services::{
    AnalysisService, CommitQuery, DEFAULT_COMMIT_LIMIT, DEFAULT_SNAPSHOT_LIMIT, GitService,
    PageQuery, ProjectService, SnapshotService, UserService,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// Every resource service, bound to one shared client.
#[derive(Debug)]
pub struct Services<T = HttpTransport> {
    pub projects: ProjectService<T>,
    pub git: GitService<T>,
    pub analysis: AnalysisService<T>,
    pub snapshots: SnapshotService<T>,
    pub users: UserService<T>,
}

impl<T> Clone for Services<T> {
    fn clone(&self) -> Self {
        Self {
            projects: self.projects.clone(),
            git: self.git.clone(),
            analysis: self.analysis.clone(),
            snapshots: self.snapshots.clone(),
            users: self.users.clone(),
        }
    }
}

impl<T: Transport> Services<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        let client = Arc::new(client);
        Self {
            projects: ProjectService::new(Arc::clone(&client)),
            git: GitService::new(Arc::clone(&client)),
            analysis: AnalysisService::new(Arc::clone(&client)),
            snapshots: SnapshotService::new(Arc::clone(&client)),
            users: UserService::new(client),
        }
    }
}
