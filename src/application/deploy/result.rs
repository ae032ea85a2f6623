//! Deploy Result
//!
//! Result types for deploy operations.

use crate::domain::entities::Archive;

/// Result of a completed deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployResult {
    /// The archive that was shipped
    pub archive: Option<Archive>,
    /// Disk paths written, in upload order
    pub uploaded: Vec<String>,
    /// Remote execution log (only collected in debug mode)
    pub remote_log: Vec<String>,
    /// Pre-deploy commands that did not succeed
    pub failed_commands: Vec<String>,
    /// Non-fatal problems
    pub warnings: Vec<String>,
}

impl DeployResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished without any warning or failed pre-deploy command
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.failed_commands.is_empty()
    }

    /// Warnings including failed pre-deploy commands
    pub fn warning_count(&self) -> usize {
        self.warnings.len() + self.failed_commands.len()
    }
}
