//! `boardroom agents` command: show the configured roster.

use anyhow::Result;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::domain::models::AgentProfile;
use crate::infrastructure::setup::App;

#[derive(Args, Debug)]
pub struct AgentsArgs {}

fn keyword_summary(agent: &AgentProfile) -> String {
    agent
        .keywords
        .iter()
        .map(|k| format!("{} ({})", k.term, k.weight))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn execute(app: &App, _args: AgentsArgs, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "director": app.registry.director(),
            "specialists": app.registry.specialists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Role", "Kind", "Keywords", "Baseline"]);

    let director = app.registry.director();
    table.add_row(vec![
        Cell::new(&director.role),
        Cell::new("director"),
        Cell::new(keyword_summary(director)),
        Cell::new(format!("{:.2}", director.baseline_confidence)),
    ]);
    for specialist in app.registry.specialists() {
        table.add_row(vec![
            Cell::new(&specialist.role),
            Cell::new("specialist"),
            Cell::new(keyword_summary(specialist)),
            Cell::new(format!("{:.2}", specialist.baseline_confidence)),
        ]);
    }

    println!("{table}");
    Ok(())
}
