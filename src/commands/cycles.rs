//! `pathgraph cycles` command - report the cycles that block queries
//!
//! Finding cycles is a report, not a failure: the exit code is 0 either way.

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use pathgraph_core::error::Result;
use pathgraph_core::graph::find_cycles;

/// Execute the cycles command
pub fn execute(ctx: &CommandContext, id: i64) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store(&config)?;
    let graph = store.load(id)?;

    let witnesses = find_cycles(&graph);
    trace_command!(ctx, "find_cycles");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": id,
                "acyclic": witnesses.is_empty(),
                "cycles": witnesses,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if witnesses.is_empty() {
                println!("no cycles");
            } else {
                if !ctx.cli.quiet {
                    println!("{} cycle witness(es):", witnesses.len());
                }
                for witness in &witnesses {
                    println!(
                        "  {}  (cycle {}, {} nodes)",
                        witness,
                        witness.cycle().join(" → "),
                        witness.cycle_len()
                    );
                }
            }
        }
    }
    Ok(())
}
