//! `pathgraph list` command - list stored graphs

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use pathgraph_core::error::Result;

/// Execute the list command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store(&config)?;
    let graphs = store.list()?;

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&graphs)?);
        }
        OutputFormat::Human => {
            if graphs.is_empty() {
                if !ctx.cli.quiet {
                    println!("No graphs stored");
                }
                return Ok(());
            }
            for graph in &graphs {
                println!(
                    "{}  {}  \"{}\"  {} nodes, {} edges  {}",
                    graph.id,
                    graph.identity,
                    graph.name,
                    graph.nodes,
                    graph.edges,
                    graph.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
    }
    Ok(())
}
