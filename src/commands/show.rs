//! `pathgraph show` command - print the nodes and edges of a stored graph

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use pathgraph_core::error::Result;

/// Execute the show command
pub fn execute(ctx: &CommandContext, id: i64) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store(&config)?;
    let graph = store.load(id)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
        OutputFormat::Human => {
            println!("{} \"{}\" (id {})", graph.identity(), graph.name(), id);
            println!();
            println!("Nodes:");
            for node in graph.nodes() {
                println!("  {}  {}", node.id, node.name);
            }
            println!();
            println!("Edges:");
            for edge in graph.edges() {
                println!(
                    "  {}  {} -> {}  cost {}",
                    edge.id, edge.from, edge.to, edge.cost
                );
            }
        }
    }
    Ok(())
}
