//! `boardroom chat` command.

use anyhow::Result;
use clap::Args;

use crate::domain::models::ChatRequest;
use crate::infrastructure::setup::App;

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Message to send to the executives.
    pub message: String,

    /// Augment the prompt context with knowledge-base search results.
    #[arg(long)]
    pub kb: bool,
}

pub async fn execute(app: &App, args: ChatArgs, json: bool) -> Result<()> {
    let request = ChatRequest::new(args.message, args.kb);
    let response = app.orchestrator.handle(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.response);
        eprintln!(
            "[{} | confidence {:.2}{}]",
            response.role,
            response.confidence,
            if response.delegated { "" } else { " | director fallback" }
        );
    }

    Ok(())
}
