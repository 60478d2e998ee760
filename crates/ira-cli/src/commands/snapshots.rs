use ira_client::PageQuery;
use ira_core::entities::Snapshot;
use ira_views::SnapshotsHook;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::settled;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SnapshotListing<'a> {
    total: u64,
    snapshots: Vec<&'a Snapshot>,
}

#[derive(Serialize)]
struct SnapshotRow {
    id: String,
    commit: String,
    created_at: String,
    summary_version: u32,
}

/// Handle `ira snapshots`.
pub async fn handle(
    project_id: &str,
    limit: Option<u32>,
    offset: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = PageQuery {
        limit: limit.unwrap_or(ctx.config.general.snapshot_limit),
        offset: offset.unwrap_or(0),
    };
    let hook = SnapshotsHook::with_page(ctx.services.snapshots.clone(), query);
    hook.bind(Some(project_id)).await;
    let page = settled(hook.state(), "snapshots")?;
    let ordered = ira_insight::newest_first(&page.items);

    if flags.format == OutputFormat::Table {
        let rows: Vec<SnapshotRow> = ordered
            .iter()
            .map(|snapshot| SnapshotRow {
                id: snapshot.id.clone(),
                commit: snapshot
                    .commit_hash
                    .as_deref()
                    .map_or_else(|| "-".to_string(), |hash| hash.chars().take(7).collect()),
                created_at: snapshot.created_at.to_rfc3339(),
                summary_version: snapshot.summary.version(),
            })
            .collect();
        output(&rows, flags.format)
    } else {
        output(
            &SnapshotListing {
                total: page.total,
                snapshots: ordered,
            },
            flags.format,
        )
    }
}
