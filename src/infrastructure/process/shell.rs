//! Local shell command runner

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutcome, CommandRunner};

/// Runs command lines with `sh -c`, inheriting the terminal
///
/// Output goes straight to the user's terminal so build tools keep their
/// progress display.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner {
    quiet: bool,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send command stdout to stderr (used with `--json` so stdout stays an event stream)
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> CommandOutcome {
        tracing::debug!(command, cwd = %cwd.display(), "running pre-deploy command");
        let stdout = if self.quiet {
            Stdio::from(std::io::stderr())
        } else {
            Stdio::inherit()
        };
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(stdout)
            .status();

        match status {
            Ok(status) if status.success() => CommandOutcome::Success,
            Ok(status) => CommandOutcome::Failed {
                code: status.code(),
            },
            Err(e) => CommandOutcome::NotStarted {
                reason: e.to_string(),
            },
        }
    }
}
