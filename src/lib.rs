//! Ferry - one-shot deployments for hosts without a shell
//!
//! Ferry packs a project into a gzip-compressed tarball, drops it on a
//! storage disk next to a generated PHP bootstrap script, and triggers that
//! script over HTTP. The script purges the previous release, unpacks the new
//! one, migrates the database, runs the configured commands and deletes
//! itself.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployPlan, DeployResult, DeployUseCase};
pub use config::{DiskConfig, FerryConfig, ServerConfig};
pub use error::{FerryError, FerryResult};
