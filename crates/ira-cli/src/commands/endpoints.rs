use ira_views::AnalysisHook;

use crate::cli::GlobalFlags;
use crate::commands::shared::settled;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ira endpoints`.
pub async fn handle(
    project_id: &str,
    search: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let hook = AnalysisHook::new(ctx.services.analysis.clone());
    hook.bind(Some(project_id)).await;
    let analysis = settled(hook.state(), "analysis")?;

    let endpoints = ira_insight::filter_endpoints(&analysis.endpoints, search.unwrap_or_default());
    output(&endpoints, flags.format)
}
