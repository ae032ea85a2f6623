//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::deploy::{DeployPlan, DeployUseCase, ExtraUpload};
use crate::config::{DiskConfig, FerryConfig};
use crate::domain::entities::Migration;
use crate::domain::ports::RemoteDisk;
use crate::error::{FerryError, FerryResult};
use crate::infrastructure::{HttpInvoker, LocalDisk, LocalFs, ShellRunner, SshDisk, TarGzArchiver};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase =
    DeployUseCase<LocalFs, Box<dyn RemoteDisk>, HttpInvoker, ShellRunner, TarGzArchiver>;

/// Per-run switches from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployFlags {
    pub refresh: bool,
    pub debug: bool,
}

impl Default for DeployFlags {
    /// Migrate forward and collect the remote log
    fn default() -> Self {
        Self {
            refresh: false,
            debug: true,
        }
    }
}

/// Directory the project lives in: the one holding the config file
pub fn project_root_for(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Build the disk adapter for a disk config
///
/// Relative `local` roots are resolved against the project root.
pub fn create_disk(disk: &DiskConfig, project_root: &Path) -> Box<dyn RemoteDisk> {
    match disk {
        DiskConfig::Local { root } => Box::new(LocalDisk::new(project_root.join(root))),
        DiskConfig::Ssh { host, root } => Box::new(SshDisk::new(host.clone(), root.clone())),
    }
}

/// Resolve config and flags into the immutable plan for one run
pub fn build_plan(
    config: &FerryConfig,
    server_name: &str,
    project_root: &Path,
    flags: DeployFlags,
) -> FerryResult<DeployPlan> {
    let server = config.server(server_name)?;
    // fail before any side effect when the disk is missing
    config.disk_for(server_name)?;

    let url = server.deploy_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(FerryError::Config {
            file: PathBuf::from(crate::config::CONFIG_FILE),
            message: format!(
                "server '{}': deploy-url must be an http(s) URL, got '{}'",
                server_name, server.deploy_url
            ),
        });
    }

    let migration = server
        .migrate
        .then(|| Migration::new(server.php_cli.clone(), flags.refresh));
    let uploads = server
        .uploads
        .iter()
        .map(|(local, remote)| ExtraUpload {
            local: PathBuf::from(local),
            remote: remote.clone(),
        })
        .collect();

    Ok(DeployPlan::new(server_name, project_root, url)
        .with_staging_dir(config.staging_dir())
        .with_before(config.before.clone())
        .with_includes(config.includes.clone())
        .with_excludes(config.excludes.clone())
        .with_uploads(uploads)
        .with_purge_excludes(config.purge_excludes_for(server))
        .with_migration(migration)
        .with_remote_commands(config.remote.clone())
        .with_debug(flags.debug))
}

/// Create a deploy use case for a configured server
///
/// `quiet_commands` routes pre-deploy command output to stderr.
pub fn create_deploy_use_case(
    config: &FerryConfig,
    server_name: &str,
    project_root: &Path,
    quiet_commands: bool,
) -> FerryResult<ConcreteDeployUseCase> {
    let server = config.server(server_name)?;
    let disk = create_disk(config.disk_for(server_name)?, project_root);
    let invoker = HttpInvoker::new(server.timeout_secs.map(Duration::from_secs)).map_err(|e| {
        FerryError::RemoteInvocation {
            url: server.deploy_url.clone(),
            message: e.to_string(),
        }
    })?;

    Ok(DeployUseCase::new(
        LocalFs::new(),
        disk,
        invoker,
        ShellRunner::new().quiet(quiet_commands),
        TarGzArchiver::new(),
    ))
}
