//! Deploy Plan
//!
//! Everything one run needs, resolved from config and CLI flags before the
//! first stage starts. The plan is never modified during the run.

use std::path::{Path, PathBuf};

use crate::domain::entities::{
    staging_path, BootstrapScript, Migration, PurgeRules, RemoteCommand, ARCHIVE_NAME,
    DEFAULT_STAGING_DIR,
};

/// A file copied to the disk after the deployment ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraUpload {
    /// Local path, relative to the project root
    pub local: PathBuf,
    /// Destination on the disk, relative to the disk root
    pub remote: String,
}

/// Immutable input of the deploy use case
#[derive(Debug, Clone)]
pub struct DeployPlan {
    /// Server name from the config
    pub server: String,
    /// Directory commands run in and includes are relative to
    pub project_root: PathBuf,
    /// Where the archive is staged locally
    pub archive_path: PathBuf,
    /// Local commands run before packing
    pub before: Vec<String>,
    /// Paths packed into the archive
    pub includes: Vec<PathBuf>,
    /// Archive exclude patterns
    pub excludes: Vec<String>,
    /// Base URL the bootstrap script is reachable under
    pub deploy_url: String,
    /// Files uploaded after the deployment ran
    pub uploads: Vec<ExtraUpload>,
    /// Purge-exclusion patterns (global first, then per-server)
    pub purge_excludes: Vec<String>,
    /// Migration step, `None` when migrations are disabled
    pub migration: Option<Migration>,
    /// Commands run on the server after migrating
    pub remote_commands: Vec<String>,
    /// Parse and report the remote execution log
    pub debug: bool,
}

impl DeployPlan {
    pub fn new(
        server: impl Into<String>,
        project_root: impl Into<PathBuf>,
        deploy_url: impl Into<String>,
    ) -> Self {
        let project_root = project_root.into();
        let archive_path = staging_path(&project_root, Path::new(DEFAULT_STAGING_DIR));
        Self {
            server: server.into(),
            project_root,
            archive_path,
            before: Vec::new(),
            includes: Vec::new(),
            excludes: Vec::new(),
            deploy_url: deploy_url.into(),
            uploads: Vec::new(),
            purge_excludes: Vec::new(),
            migration: None,
            remote_commands: Vec::new(),
            debug: false,
        }
    }

    pub fn with_staging_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.archive_path = staging_path(&self.project_root, dir.as_ref());
        self
    }

    pub fn with_before(mut self, commands: Vec<String>) -> Self {
        self.before = commands;
        self
    }

    pub fn with_includes(mut self, includes: Vec<PathBuf>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn with_uploads(mut self, uploads: Vec<ExtraUpload>) -> Self {
        self.uploads = uploads;
        self
    }

    pub fn with_purge_excludes(mut self, patterns: Vec<String>) -> Self {
        self.purge_excludes = patterns;
        self
    }

    pub fn with_migration(mut self, migration: Option<Migration>) -> Self {
        self.migration = migration;
        self
    }

    pub fn with_remote_commands(mut self, commands: Vec<String>) -> Self {
        self.remote_commands = commands;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Whether the migration step reseeds the database
    pub fn refresh(&self) -> bool {
        self.migration.as_ref().is_some_and(Migration::is_refresh)
    }

    /// The bootstrap script this plan deploys with
    pub fn bootstrap_script(&self) -> BootstrapScript {
        BootstrapScript::new(
            ARCHIVE_NAME,
            PurgeRules::new(&self.purge_excludes),
            self.migration.clone(),
            self.remote_commands.iter().map(RemoteCommand::new).collect(),
        )
    }
}
