//! `pathgraph validate` command - check a graph document without storing it

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use pathgraph_core::error::Result;
use pathgraph_core::ingest::read_graph_file;

/// Execute the validate command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = read_graph_file(&ctx.cwd.join(file))?;
    trace_command!(ctx, "read_graph");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "valid": true,
                "identity": graph.identity(),
                "name": graph.name(),
                "nodes": graph.nodes().len(),
                "edges": graph.edges().len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if ctx.cli.quiet {
                println!("valid");
            } else {
                println!(
                    "valid: {} ({} nodes, {} edges)",
                    graph.identity(),
                    graph.nodes().len(),
                    graph.edges().len()
                );
            }
        }
    }
    Ok(())
}
