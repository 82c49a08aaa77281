//! `pathgraph load` command - validate a graph document and store it

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use pathgraph_core::error::Result;
use pathgraph_core::ingest::read_graph_file;

/// Execute the load command; prints the new store id
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = read_graph_file(&ctx.cwd.join(file))?;
    trace_command!(ctx, "read_graph");

    let config = ctx.config()?;
    let mut store = ctx.open_store(&config)?;
    let id = store.create(&graph)?;
    trace_command!(ctx, "store_graph");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": id,
                "identity": graph.identity(),
                "name": graph.name(),
                "nodes": graph.nodes().len(),
                "edges": graph.edges().len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", id),
    }
    Ok(())
}
