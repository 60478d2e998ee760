pub mod auth;
pub mod deps;
pub mod dispatch;
pub mod endpoints;
pub mod git;
pub mod icon;
pub mod projects;
pub mod shared;
pub mod snapshots;
pub mod tech;
