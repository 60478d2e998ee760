use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, GitCommands, ProjectCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Projects and their members.
    Projects {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Branches and commit history of a project.
    Git {
        #[command(subcommand)]
        action: GitCommands,
    },
    /// Languages, frameworks and infrastructure of a project.
    Tech { project_id: String },
    /// HTTP endpoints detected in a project.
    Endpoints {
        project_id: String,
        /// Case-insensitive match on path, method, file or symbol.
        #[arg(long)]
        search: Option<String>,
    },
    /// Dependencies grouped by manifest file.
    Deps {
        project_id: String,
        /// Write the dependencies to this file; the extension picks the format.
        #[arg(long, value_name = "FILE")]
        export: Option<String>,
    },
    /// Analysis snapshots, newest first.
    Snapshots {
        project_id: String,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Sign in and manage the current user.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Resolve the devicon for a technology label.
    Icon { label: String },
}
