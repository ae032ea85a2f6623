//! Configuration module for ferry
//!
//! One TOML file (`ferry.toml`) describes the project, its disks and its
//! servers. The file is found via `--config`, then `FERRY_CONFIG`, then the
//! working directory. Unknown keys are reported as warnings, never errors.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    load_with_warnings, parse_with_warnings, resolve_config_path, ConfigError, ConfigWarning,
    CONFIG_ENV, CONFIG_FILE,
};
pub use types::{DiskConfig, FerryConfig, ServerConfig};
