//! Config file discovery
//!
//! `.ui-store.toml` is looked up in this order, first hit wins:
//! 1. the working directory
//! 2. the home directory
//! 3. `config.toml` in the platform config directory (see [`crate::paths`])

use std::env;
use std::path::{Path, PathBuf};

/// Config file name in the working and home directories
pub const CONFIG_FILE: &str = ".ui-store.toml";

/// Config file name inside the platform config directory
pub const CONFIG_DIR_FILE: &str = "config.toml";

/// Load config file content from the real working, home and config directories
pub fn load_config_file() -> Option<String> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let home = dirs::home_dir();
    let config_dir = crate::paths::config_dir()
        .map_err(|e| log::debug!("No config directory: {:#}", e))
        .ok();

    load_config_file_from(&cwd, home.as_deref(), config_dir.as_deref())
}

/// Candidate config files, in search order
pub fn search_paths(cwd: &Path, home: Option<&Path>, config_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(CONFIG_FILE)];
    paths.extend(home.map(|dir| dir.join(CONFIG_FILE)));
    paths.extend(config_dir.map(|dir| dir.join(CONFIG_DIR_FILE)));
    paths
}

/// Load the content of the first config file found under the given directories
pub fn load_config_file_from(
    cwd: &Path,
    home: Option<&Path>,
    config_dir: Option<&Path>,
) -> Option<String> {
    search_paths(cwd, home, config_dir)
        .into_iter()
        .find_map(|path| match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some(content)
            }
            Err(_) => None,
        })
}
