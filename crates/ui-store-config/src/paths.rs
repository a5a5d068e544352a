//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/ui-store/`, `~/.cache/ui-store/`
//! - macOS: `~/Library/Application Support/ui-store/`, `~/Library/Caches/ui-store/`
//! - Windows: `%APPDATA%\ui-store\`, `%LOCALAPPDATA%\ui-store\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "ui-store";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}
