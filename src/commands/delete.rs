//! `pathgraph delete` command - remove a stored graph

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use pathgraph_core::error::Result;

/// Execute the delete command
pub fn execute(ctx: &CommandContext, id: i64) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store(&config)?;
    store.delete(id)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": id }));
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("deleted {}", id);
            }
        }
    }
    Ok(())
}
