//! Application configuration
//!
//! Configuration loaded from .ui-store.toml. Only the demo shell reads it;
//! the store's initial state never depends on it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use ui_store::state::{BUG_SIDEBAR, CHAT_LIST, FILES_SIDEBAR};

/// Application configuration loaded from .ui-store.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pages the sidebar builds upfront, in display order
    #[serde(default = "default_sidebar_pages")]
    pub sidebar_pages: Vec<String>,

    /// Width of the sidebar column in terminal cells
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_sidebar_pages() -> Vec<String> {
    [CHAT_LIST, FILES_SIDEBAR, BUG_SIDEBAR]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_sidebar_width() -> u16 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            sidebar_pages: default_sidebar_pages(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD, home or config directory, or use defaults
    pub fn load() -> Self {
        Self::from_file_content(crate::load_config_file())
    }

    /// Same as [`AppConfig::load`], searching the given directories
    pub fn load_from(cwd: &Path, home: Option<&Path>, config_dir: Option<&Path>) -> Self {
        Self::from_file_content(crate::load_config_file_from(cwd, home, config_dir))
    }

    /// Parse found config content, falling back to defaults when absent or invalid
    fn from_file_content(content: Option<String>) -> Self {
        if let Some(content) = content {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }
}
