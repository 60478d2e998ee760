use ira_client::CommitQuery;
use ira_views::GitHook;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GitCommands;
use crate::commands::shared::settled;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct BranchRow {
    name: String,
    active: bool,
}

#[derive(Serialize)]
struct CommitRow {
    hash: String,
    subject: String,
    author: String,
    authored_at: String,
}

/// Handle `ira git`.
pub async fn handle(action: &GitCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GitCommands::Branches { project_id } => {
            let hook = GitHook::new(ctx.services.git.clone());
            hook.bind(Some(project_id.as_str())).await;
            let active = hook.active_branch();
            let rows: Vec<BranchRow> = settled(hook.branches(), "branches")?
                .into_iter()
                .map(|branch| BranchRow {
                    active: active.as_deref() == Some(branch.name()),
                    name: branch.0,
                })
                .collect();
            output(&rows, flags.format)
        }
        GitCommands::Commits {
            project_id,
            limit,
            since,
            until,
        } => {
            let query = CommitQuery {
                limit: limit.unwrap_or(ctx.config.general.commit_limit),
                since: since.clone(),
                until: until.clone(),
            };
            let hook = GitHook::with_commit_query(ctx.services.git.clone(), query);
            hook.bind(Some(project_id.as_str())).await;
            let commits = settled(hook.commits(), "commits")?;
            let rows: Vec<CommitRow> = commits
                .iter()
                .map(|commit| CommitRow {
                    hash: commit.short_hash().to_string(),
                    subject: commit.subject().to_string(),
                    author: commit.author_name.clone(),
                    authored_at: commit.authored_at.to_rfc3339(),
                })
                .collect();
            output(&rows, flags.format)
        }
    }
}
