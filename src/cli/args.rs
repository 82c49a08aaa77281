//! Argument structures shared by several subcommands

use clap::Args;
use std::path::PathBuf;

use crate::cli::parse::parse_cost_ceiling;

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Path to an XML graph document
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Store id of the graph (as printed by `load`)
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Store id of the graph (as printed by `load`)
    pub id: i64,

    /// JSON request file (`{"queries": [...]}`); reads stdin when omitted
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Only report cheapest paths costing less than this (overrides config)
    #[arg(long, value_parser = parse_cost_ceiling)]
    pub max_cost: Option<f64>,
}
