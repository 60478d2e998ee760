//! # ira-core
//!
//! Core types shared by every IRA Observer crate.
//!
//! - Entity structs for the read-only projections served by the backend
//!   (projects, members, users, snapshots, git history, analysis results)
//! - [`LabelMap`], an insertion-ordered `label -> value` mapping used for the
//!   per-language and per-framework analysis payloads
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod label_map;

pub use errors::CoreError;
pub use label_map::LabelMap;
