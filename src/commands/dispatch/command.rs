//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use pathgraph_core::config::Config;
use pathgraph_core::error::Result;
use pathgraph_core::store::GraphStore;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: PathBuf, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Resolve configuration from `--config`, the working directory or the
    /// global file, then apply `--db`
    pub fn config(&self) -> Result<Config> {
        let config = Config::discover(self.cli.config.as_deref(), &self.cwd)?;
        Ok(match &self.cli.db {
            Some(db) => config.with_store_path(db),
            None => config,
        })
    }

    /// Configured database path, resolved against the working directory
    pub fn store_path(&self, config: &Config) -> PathBuf {
        self.cwd.join(&config.store.path)
    }

    pub fn open_store(&self, config: &Config) -> Result<GraphStore> {
        GraphStore::open(&self.store_path(config))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Validate directed weighted graphs and query their paths.");
        println!();
        println!("Run `pathgraph --help` for usage information.");
        Ok(())
    }
}
