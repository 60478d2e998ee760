use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum GitCommands {
    /// List branches; the active one is flagged.
    Branches { project_id: String },
    /// Show recent commits.
    Commits {
        project_id: String,
        /// Defaults to `general.commit_limit`.
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        since: Option<String>,
        #[arg(long)]
        until: Option<String>,
    },
}
