use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Projects { action } => commands::projects::handle(&action, ctx, flags).await,
        Commands::Git { action } => commands::git::handle(&action, ctx, flags).await,
        Commands::Tech { project_id } => commands::tech::handle(&project_id, ctx, flags).await,
        Commands::Endpoints { project_id, search } => {
            commands::endpoints::handle(&project_id, search.as_deref(), ctx, flags).await
        }
        Commands::Deps { project_id, export } => {
            commands::deps::handle(&project_id, export.as_deref(), ctx, flags).await
        }
        Commands::Snapshots {
            project_id,
            limit,
            offset,
        } => commands::snapshots::handle(&project_id, limit, offset, ctx, flags).await,
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Icon { label } => commands::icon::handle(&label, flags),
    }
}
