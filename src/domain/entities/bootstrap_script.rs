//! Bootstrap script model
//!
//! The structured description of what the remote `deploy.php` does. It is
//! rendered to PHP by `domain::services::script_synthesizer`; nothing else
//! builds script text.

use serde::Serialize;

use crate::domain::value_objects::PurgePattern;

/// File name of the bootstrap script on the disk
pub const SCRIPT_NAME: &str = "deploy.php";

/// Web-facing directory that holds the script and survives release rotation
pub const PUBLIC_DIR: &str = "public";

/// Disk path the script is uploaded to
pub fn script_remote_path() -> String {
    format!("{}/{}", PUBLIC_DIR, SCRIPT_NAME)
}

/// URL that triggers the uploaded script
pub fn invocation_url(deploy_url: &str, archive_name: &str) -> String {
    format!(
        "{}/{}?archive={}",
        deploy_url.trim_end_matches('/'),
        SCRIPT_NAME,
        archive_name
    )
}

/// Which paths survive the purge of the deployment directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeRules {
    patterns: Vec<PurgePattern>,
}

impl PurgeRules {
    /// Normalize and de-duplicate raw patterns, keeping first-seen order
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<PurgePattern> = Vec::new();
        for item in raw {
            if let Some(pattern) = PurgePattern::new(item.as_ref()) {
                if !patterns.contains(&pattern) {
                    patterns.push(pattern);
                }
            }
        }
        Self { patterns }
    }

    pub fn patterns(&self) -> &[PurgePattern] {
        &self.patterns
    }

    /// Suffixes whose match keeps an entry (and its whole subtree)
    pub fn keep_suffixes(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.as_str().to_string()).collect()
    }

    /// Suffixes of directories that hold a protected path further down
    pub fn descend_suffixes(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for ancestor in self.patterns.iter().flat_map(PurgePattern::ancestors) {
            if !out.contains(&ancestor) {
                out.push(ancestor);
            }
        }
        out
    }
}

/// Database migration step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    interpreter: String,
    refresh: bool,
}

impl Migration {
    pub fn new(interpreter: impl Into<String>, refresh: bool) -> Self {
        Self {
            interpreter: interpreter.into(),
            refresh,
        }
    }

    pub fn is_refresh(&self) -> bool {
        self.refresh
    }

    /// Shell command run on the server; always non-interactive
    pub fn command_line(&self) -> String {
        let variant = if self.refresh { ":refresh --seed" } else { "" };
        format!("{} artisan migrate{} --force", self.interpreter, variant)
    }
}

/// A post-deploy command run on the server, kept as raw (unescaped) text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RemoteCommand(String);

impl RemoteCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything the bootstrap script needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapScript {
    archive_name: String,
    purge: PurgeRules,
    migration: Option<Migration>,
    commands: Vec<RemoteCommand>,
}

impl BootstrapScript {
    pub fn new(
        archive_name: impl Into<String>,
        purge: PurgeRules,
        migration: Option<Migration>,
        commands: Vec<RemoteCommand>,
    ) -> Self {
        Self {
            archive_name: archive_name.into(),
            purge,
            migration,
            commands,
        }
    }

    pub fn archive_name(&self) -> &str {
        &self.archive_name
    }

    pub fn purge(&self) -> &PurgeRules {
        &self.purge
    }

    pub fn migration(&self) -> Option<&Migration> {
        self.migration.as_ref()
    }

    pub fn commands(&self) -> &[RemoteCommand] {
        &self.commands
    }
}
