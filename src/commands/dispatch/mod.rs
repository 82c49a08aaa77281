//! Command dispatch logic for pathgraph

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use pathgraph_core::error::Result;
use tracing::debug;

mod command;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    debug!(elapsed = ?start.elapsed(), "resolve_cwd");

    let ctx = CommandContext::new(cli, cwd, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Validate(args) => commands::validate::execute(ctx, &args.file),
            Commands::Load(args) => commands::load::execute(ctx, &args.file),
            Commands::List => commands::list::execute(ctx),
            Commands::Show(args) => commands::show::execute(ctx, args.id),
            Commands::Cycles(args) => commands::cycles::execute(ctx, args.id),
            Commands::Query(args) => commands::query::execute(ctx, args),
            Commands::Delete(args) => commands::delete::execute(ctx, args.id),
        }
    }
}
