//! `pathgraph query` command - answer a batch of path queries
//!
//! The request is `{"queries": [...]}` where each query has a `paths` and/or
//! a `cheapest` member, each `{"start": .., "end": ..}`. Answers come back in
//! request order as `{"answers": [...]}`. A graph with any cycle refuses the
//! whole batch.

use std::fs;
use std::io;

use crate::cli::{OutputFormat, QueryArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use pathgraph_core::error::{PathgraphError, Result};
use pathgraph_core::graph::{Answer, CheapestPath, Cost, QueryBatch, QueryEngine};

/// Execute the query command
pub fn execute(ctx: &CommandContext, args: &QueryArgs) -> Result<()> {
    let request = match &args.input {
        Some(path) => {
            let path = ctx.cwd.join(path);
            fs::read_to_string(&path)
                .map_err(|e| PathgraphError::io_operation("read", path.display(), e))?
        }
        None => io::read_to_string(io::stdin())
            .map_err(|e| PathgraphError::io_operation("read", "stdin", e))?,
    };
    let batch = QueryBatch::from_json(&request)?;
    trace_command!(ctx, "parse_request");

    let config = ctx.config()?;
    let store = ctx.open_store(&config)?;
    let graph = store.load(args.id)?;
    trace_command!(ctx, "load_graph");

    let ceiling = args
        .max_cost
        .map(Cost::new)
        .unwrap_or_else(|| config.cost_ceiling());
    let engine = QueryEngine::new(&graph)?.with_cost_ceiling(ceiling);
    let answers = engine.answer(&batch.queries);
    trace_command!(ctx, "answer_queries");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "answers": answers });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_human(&answers),
    }
    Ok(())
}

fn print_human(answers: &[Answer]) {
    for (index, answer) in answers.iter().enumerate() {
        if index > 0 {
            println!();
        }
        if let Some(paths) = &answer.paths {
            println!("paths {} -> {}:", paths.from, paths.to);
            if paths.paths.is_empty() {
                println!("  (none)");
            }
            for path in &paths.paths {
                println!("  {}", path.join(" -> "));
            }
        }
        if let Some(cheapest) = &answer.cheapest {
            match &cheapest.result {
                CheapestPath::Found { cost, path } => println!(
                    "cheapest {} -> {}: cost {} via {}",
                    cheapest.from,
                    cheapest.to,
                    cost,
                    path.join(" -> ")
                ),
                CheapestPath::NoPath => {
                    println!("cheapest {} -> {}: no path", cheapest.from, cheapest.to)
                }
            }
        }
    }
}
