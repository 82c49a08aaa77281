//! CLI argument parsing for pathgraph
//!
//! Global flags: --db, --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{FileArgs, GraphArgs, QueryArgs};
use parse::parse_format;
pub use pathgraph_core::format::OutputFormat;

/// Pathgraph - validate directed weighted graphs and query their paths
#[derive(Parser, Debug)]
#[command(name = "pathgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph database file (overrides [store] path from config)
    #[arg(long, global = true, env = "PATHGRAPH_DB")]
    pub db: Option<PathBuf>,

    /// Configuration file (default: ./pathgraph.toml, then the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug output and phase timings to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a graph document without storing it
    Validate(FileArgs),

    /// Validate a graph document and store it
    Load(FileArgs),

    /// List stored graphs
    List,

    /// Show the nodes and edges of a stored graph
    Show(GraphArgs),

    /// Report the cycles of a stored graph
    Cycles(GraphArgs),

    /// Answer a batch of path queries against a stored graph
    Query(QueryArgs),

    /// Delete a stored graph
    Delete(GraphArgs),
}
