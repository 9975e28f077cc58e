//! CLI subcommand implementations.

pub mod agents;
pub mod chat;
pub mod route;
