use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Show the signed-in user.
    Whoami,
    /// Exchange credentials for an access token.
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },
    /// Change the current user's profile.
    Update {
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}
