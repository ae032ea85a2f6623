//! Command Runner Port
//!
//! Runs the local pre-deploy commands. Outcomes are reported, never
//! enforced: a failing command does not stop the deployment.

use std::path::Path;

/// Outcome of a single local command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Exited with status 0
    Success,
    /// Exited with a non-zero status (`None` when killed by a signal)
    Failed { code: Option<i32> },
    /// Could not be started at all
    NotStarted { reason: String },
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

/// Executes a shell command line in a working directory
pub trait CommandRunner {
    fn run(&self, command: &str, cwd: &Path) -> CommandOutcome;
}
