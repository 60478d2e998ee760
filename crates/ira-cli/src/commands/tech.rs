use ira_insight::TechnologyOverview;
use ira_views::AnalysisHook;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::settled;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TechRow {
    kind: &'static str,
    name: String,
    value: String,
    icon: String,
}

/// Handle `ira tech`.
pub async fn handle(project_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let hook = AnalysisHook::new(ctx.services.analysis.clone());
    hook.bind(Some(project_id)).await;
    let analysis = settled(hook.state(), "analysis")?;

    let overview = TechnologyOverview::build(
        &analysis.languages,
        &analysis.frameworks,
        &analysis.infrastructure,
    );
    if flags.format == OutputFormat::Table {
        output(&rows(&overview), flags.format)
    } else {
        output(&overview, flags.format)
    }
}

fn rows(overview: &TechnologyOverview) -> Vec<TechRow> {
    let languages = overview.languages.iter().map(|share| TechRow {
        kind: "language",
        name: share.language.clone(),
        value: format!("{} lines ({})", share.lines, share.display_percentage()),
        icon: ira_insight::icon_url(&share.language),
    });
    let frameworks = overview.frameworks.iter().map(|framework| TechRow {
        kind: "framework",
        name: framework.label.clone(),
        value: format!("{:.2}", framework.value),
        icon: ira_insight::icon_url(&framework.label),
    });
    let infrastructure = overview.infrastructure.iter().map(|tech| TechRow {
        kind: "infrastructure",
        name: tech.label.clone(),
        value: String::new(),
        icon: tech.icon_url.clone(),
    });
    languages.chain(frameworks).chain(infrastructure).collect()
}
