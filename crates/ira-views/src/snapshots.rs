use ira_client::{HttpTransport, PageQuery, SnapshotService, Transport};
use ira_core::entities::{Snapshot, SnapshotPage};

use crate::binding::{Binding, IdentifierSlot};
use crate::resource::{Resource, ResourceState};

/// One page of a project's snapshots, in backend order.
#[derive(Debug)]
pub struct SnapshotsHook<T = HttpTransport> {
    service: SnapshotService<T>,
    project_id: IdentifierSlot,
    page: Resource<SnapshotPage>,
    query: PageQuery,
}

impl<T: Transport> SnapshotsHook<T> {
    pub fn new(service: SnapshotService<T>) -> Self {
        Self::with_page(service, PageQuery::default())
    }

    pub fn with_page(service: SnapshotService<T>, query: PageQuery) -> Self {
        Self {
            service,
            project_id: IdentifierSlot::new(),
            page: Resource::new("Failed to fetch snapshots"),
            query,
        }
    }

    pub async fn bind(&self, project_id: Option<&str>) {
        match self.project_id.bind(project_id) {
            Binding::Unchanged => {}
            Binding::Cleared => self.page.settle_empty(),
            Binding::Changed(id) => self.fetch(&id).await,
        }
    }

    pub async fn refetch(&self) {
        if let Some(id) = self.project_id.current() {
            self.fetch(&id).await;
        }
    }

    async fn fetch(&self, id: &str) {
        self.page.run(self.service.compact(id, self.query)).await;
    }

    #[must_use]
    pub fn state(&self) -> ResourceState<SnapshotPage> {
        self.page.state()
    }

    /// Snapshots of the last applied round; empty before the first one.
    #[must_use]
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.page.data().map(|page| page.items).unwrap_or_default()
    }

    /// Total count reported by the backend, `0` before the first round.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.page.data().map_or(0, |page| page.total)
    }
}
