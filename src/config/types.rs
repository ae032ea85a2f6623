//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_STAGING_DIR;
use crate::error::{FerryError, FerryResult};

use super::loader::{self, suggest_name, ConfigWarning};

/// Top level of `ferry.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FerryConfig {
    /// Local commands run in the project root before packing
    pub before: Vec<String>,
    /// Paths packed into the archive, relative to the project root
    pub includes: Vec<PathBuf>,
    /// Archive exclude patterns
    pub excludes: Vec<String>,
    /// Commands run on the server after migrating
    pub remote: Vec<String>,
    /// Paths that survive the purge of `public/`
    pub purge_excludes: Vec<String>,
    /// Local staging directory for the archive
    pub staging_dir: Option<PathBuf>,
    pub disks: BTreeMap<String, DiskConfig>,
    pub servers: BTreeMap<String, ServerConfig>,
}

/// A storage back end servers refer to by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "driver", rename_all = "lowercase")]
pub enum DiskConfig {
    /// A directory on this machine (mounted share, local docroot)
    Local { root: PathBuf },
    /// A directory on a host reachable with `ssh`
    Ssh { host: String, root: PathBuf },
}

/// One deployment target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name of the disk in `[disks]`
    pub disk: String,

    /// Base URL the `public` directory is served under
    #[serde(rename = "deploy-url", alias = "deploy_url")]
    pub deploy_url: String,

    /// PHP interpreter on the server
    #[serde(rename = "php-cli", alias = "php_cli", default = "default_php_cli")]
    pub php_cli: String,

    /// Appended to the global purge exclusions
    #[serde(default)]
    pub purge_excludes: Vec<String>,

    /// Local path (relative to the project root) -> disk path
    #[serde(default)]
    pub uploads: BTreeMap<String, String>,

    /// HTTP timeout for the remote invocation; unset waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Run database migrations
    #[serde(default = "default_true")]
    pub migrate: bool,
}

fn default_php_cli() -> String {
    "php".to_string()
}

fn default_true() -> bool {
    true
}

impl FerryConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FerryResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings
    pub fn load_with_warnings(path: &Path) -> FerryResult<(Self, Vec<ConfigWarning>)> {
        Ok(loader::load_with_warnings(path)?)
    }

    /// Look up a server by name
    pub fn server(&self, name: &str) -> FerryResult<&ServerConfig> {
        self.servers
            .get(name)
            .ok_or_else(|| FerryError::UnknownServer {
                name: name.to_string(),
                suggestion: suggest_name(name, self.servers.keys().map(String::as_str)),
            })
    }

    /// The disk a server writes to
    pub fn disk_for(&self, server_name: &str) -> FerryResult<&DiskConfig> {
        let server = self.server(server_name)?;
        self.disks
            .get(&server.disk)
            .ok_or_else(|| FerryError::UnknownDisk {
                server: server_name.to_string(),
                disk: server.disk.clone(),
            })
    }

    /// Global purge exclusions followed by the server's own
    pub fn purge_excludes_for(&self, server: &ServerConfig) -> Vec<String> {
        self.purge_excludes
            .iter()
            .chain(server.purge_excludes.iter())
            .cloned()
            .collect()
    }

    /// Staging directory, relative to the project root
    pub fn staging_dir(&self) -> &Path {
        self.staging_dir
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_STAGING_DIR))
    }
}
