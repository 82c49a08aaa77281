//! Configuration for pathgraph
//!
//! Settings are read from TOML. Lookup order: an explicit `--config` path,
//! then `pathgraph.toml` in the working directory, then the global config
//! file (see [`global`]), then built-in defaults.

pub mod global;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bail_invalid;
use crate::error::{PathgraphError, Result};
use crate::graph::Cost;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "pathgraph.toml";

/// Database file used when nothing else is configured
pub const DEFAULT_STORE_PATH: &str = "pathgraph.db";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub query: QueryConfig,
}

/// Where graphs are persisted
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreConfig {
    /// SQLite database file; relative paths resolve against the working directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

/// Query tuning
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct QueryConfig {
    /// Cheapest paths must cost strictly less than this; unbounded if unset
    #[serde(default)]
    pub cost_ceiling: Option<f64>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathgraphError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve the configuration for a run started in `cwd`
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        Self::discover_with_global(explicit, cwd, global::config_path())
    }

    fn discover_with_global(
        explicit: Option<&Path>,
        cwd: &Path,
        global_path: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }

        match global_path {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ceiling) = self.query.cost_ceiling {
            if ceiling.is_nan() || ceiling <= 0.0 {
                bail_invalid!("query.cost_ceiling", ceiling);
            }
        }
        Ok(())
    }

    /// Ceiling for cheapest path search
    pub fn cost_ceiling(&self) -> Cost {
        self.query
            .cost_ceiling
            .map(Cost::new)
            .unwrap_or(Cost::UNBOUNDED)
    }

    /// Replace the store path, as `--db` does
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.path = path.into();
        self
    }
}
