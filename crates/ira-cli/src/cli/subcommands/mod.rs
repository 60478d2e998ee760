mod auth;
mod git;
mod projects;

pub use auth::AuthCommands;
pub use git::GitCommands;
pub use projects::ProjectCommands;
