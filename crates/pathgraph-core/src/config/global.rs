//! Global configuration location (`~/.config/pathgraph/config.toml`)

use std::path::PathBuf;

const CONFIG_DIR: &str = "pathgraph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHGRAPH_CONFIG_DIR";

/// Path of the global config file, whether or not it exists.
///
/// `PATHGRAPH_CONFIG_DIR` replaces the platform config directory.
pub fn config_path() -> Option<PathBuf> {
    config_path_from(std::env::var_os(CONFIG_DIR_ENV_VAR).map(PathBuf::from))
}

fn config_path_from(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    let config_dir = match override_dir {
        Some(dir) => dir,
        None => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(config_dir.join(CONFIG_FILE))
}
