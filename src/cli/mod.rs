//! Command-line interface.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::agents::AgentsArgs;
use commands::chat::ChatArgs;
use commands::route::RouteArgs;

/// Executive chat agents with keyword-scored delegation.
#[derive(Parser, Debug)]
#[command(name = "boardroom", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON instead of human output.
    #[arg(long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .boardroom/.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a message and print the selected executive's answer.
    Chat(ChatArgs),
    /// Score a message against every specialist without answering it.
    Route(RouteArgs),
    /// Show the configured agent roster.
    Agents(AgentsArgs),
}

/// Report a fatal error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let output = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{output}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
