//! Boardroom CLI entry point.

use clap::Parser;

use boardroom::cli::{self, Cli, Commands};
use boardroom::infrastructure::config::ConfigLoader;
use boardroom::infrastructure::{logging, setup};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let _log_guard = logging::init(&config.logging)?;

    let app = setup::build(&config)?;

    match cli.command {
        Commands::Chat(args) => cli::commands::chat::execute(&app, args, cli.json).await,
        Commands::Route(args) => cli::commands::route::execute(&app, args, cli.json).await,
        Commands::Agents(args) => cli::commands::agents::execute(&app, args, cli.json),
    }
}
