use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects.
    List,
    /// Get a project by ID.
    Get { id: String },
    /// Register a project.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        source_ref: String,
        #[arg(long, default_value = "git")]
        source_type: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update selected fields of a project.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        source_ref: Option<String>,
    },
    /// Delete a project.
    Delete { id: String },
    /// List project members.
    Members {
        id: String,
        /// Include members whose access was revoked.
        #[arg(long)]
        all: bool,
    },
}
