//! Configuration and file management for the ui-store demo shell
//!
//! This crate provides:
//! - Directory utilities for config and cache files
//! - Configuration file discovery and loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, load_config_file_from};
pub use paths::{cache_dir, config_dir};
