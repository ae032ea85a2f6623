//! Command handlers for the `ferry` binary

use std::path::{Path, PathBuf};

use anyhow::Result;
use ferry::config::{resolve_config_path, CONFIG_ENV};
use ferry::FerryConfig;

pub mod deploy;
pub mod render;
pub mod servers;

pub fn config_path(cli: Option<&Path>) -> PathBuf {
    resolve_config_path(cli, std::env::var(CONFIG_ENV).ok())
}

/// Load the config, reporting unknown keys on stderr
pub fn load_config(path: &Path) -> Result<FerryConfig> {
    let (config, warnings) = FerryConfig::load_with_warnings(path)?;
    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(config)
}
