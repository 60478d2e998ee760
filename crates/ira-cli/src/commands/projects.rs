use ira_core::entities::{ProjectCreate, ProjectUpdate};
use ira_core::enums::SourceType;
use ira_views::{ProjectHook, ProjectMembersHook, ProjectsHook};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::settled;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ira projects`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.services.projects;
    match action {
        ProjectCommands::List => {
            let hook = ProjectsHook::new(service.clone());
            hook.load().await;
            output(&settled(hook.state(), "projects")?, flags.format)
        }
        ProjectCommands::Get { id } => {
            let hook = ProjectHook::new(service.clone());
            hook.bind(Some(id.as_str())).await;
            output(&settled(hook.state(), "project")?, flags.format)
        }
        ProjectCommands::Create {
            name,
            source_ref,
            source_type,
            description,
        } => {
            let payload = ProjectCreate {
                name: name.clone(),
                description: description.clone(),
                source_type: source_type.parse::<SourceType>()?,
                source_ref: source_ref.clone(),
            };
            output(&service.create(&payload).await?, flags.format)
        }
        ProjectCommands::Update {
            id,
            name,
            description,
            source_ref,
        } => {
            let changes = ProjectUpdate {
                name: name.clone(),
                description: description.clone(),
                source_ref: source_ref.clone(),
                ..ProjectUpdate::default()
            };
            if changes.is_empty() {
                anyhow::bail!("nothing to update: pass --name, --description or --source-ref");
            }
            output(&service.update(id, &changes).await?, flags.format)
        }
        ProjectCommands::Delete { id } => {
            service.delete(id).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
        ProjectCommands::Members { id, all } => {
            let hook = ProjectMembersHook::new(service.clone());
            hook.bind(Some(id.as_str())).await;
            let members = settled(hook.state(), "members")?;
            if *all {
                output(&members, flags.format)
            } else {
                output(&ira_insight::current_members(&members), flags.format)
            }
        }
    }
}
