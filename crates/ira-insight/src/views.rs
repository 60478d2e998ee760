//! Selections and orderings applied by pages on top of hook data.

use ira_core::entities::{ApiEndpoint, ProjectMember, Snapshot};

/// Members whose access has not been revoked.
#[must_use]
pub fn current_members(members: &[ProjectMember]) -> Vec<&ProjectMember> {
    members.iter().filter(|m| !m.is_revoked()).collect()
}

/// Newest `created_at` first; snapshots created at the same instant keep
/// their input order.
#[must_use]
pub fn newest_first(snapshots: &[Snapshot]) -> Vec<&Snapshot> {
    let mut ordered: Vec<&Snapshot> = snapshots.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ordered
}

/// Endpoints whose path, method, source file or symbol contains `query`,
/// ignoring case. A blank query matches everything.
#[must_use]
pub fn filter_endpoints<'a>(endpoints: &'a [ApiEndpoint], query: &str) -> Vec<&'a ApiEndpoint> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return endpoints.iter().collect();
    }
    let hit = |field: &str| field.to_lowercase().contains(&needle);
    endpoints
        .iter()
        .filter(|e| {
            hit(&e.path)
                || hit(&e.http_method)
                || hit(&e.source_file)
                || e.source_symbol.as_deref().is_some_and(hit)
        })
        .collect()
}
