//! `boardroom route` command: dry-run delegation diagnostics.
//!
//! Shows how every specialist scored a message and who would answer it,
//! without generating a response. Useful when diagnosing mis-delegation.

use anyhow::Result;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::infrastructure::setup::App;

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Message to score.
    pub message: String,
}

pub async fn execute(app: &App, args: RouteArgs, json: bool) -> Result<()> {
    let candidates = app.orchestrator.router().score_all(&args.message, &app.registry);
    let decision = app.orchestrator.router().route(&args.message, &app.registry);

    if json {
        let output = serde_json::json!({
            "candidates": candidates,
            "selected": decision.agent.role,
            "confidence": decision.confidence,
            "delegated": decision.delegated,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Role", "Raw score", "Confidence", "Selected"]);
    for candidate in &candidates {
        table.add_row(vec![
            Cell::new(&candidate.role),
            Cell::new(format!("{:.2}", candidate.raw_score)),
            Cell::new(format!("{:.3}", candidate.confidence)),
            Cell::new(if decision.delegated && candidate.role == decision.agent.role {
                "yes"
            } else {
                ""
            }),
        ]);
    }
    println!("{table}");

    if decision.delegated {
        println!(
            "Delegated to {} (confidence {:.3})",
            decision.agent.role, decision.confidence
        );
    } else {
        println!(
            "No specialist cleared the threshold; {} answers at baseline {:.2}",
            decision.agent.role, decision.confidence
        );
    }

    Ok(())
}
