//! SSH disk
//!
//! Writes files on a remote host by piping them through `ssh`. Only the
//! system `ssh` client is used; authentication is whatever it is configured
//! with (agent, keys, `~/.ssh/config`).

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::relative_disk_path;
use crate::domain::ports::{DiskError, RemoteDisk};

/// Disk on a remote host reached with `ssh`
#[derive(Debug, Clone)]
pub struct SshDisk {
    /// SSH destination (user@host or host alias)
    destination: String,
    /// Release root on the remote host
    root: PathBuf,
}

impl SshDisk {
    pub fn new(destination: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            root: root.into(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Quote a path for safe use in shell commands
    fn quote_path(path: &Path) -> String {
        format!("'{}'", path.to_string_lossy().replace('\'', "'\\''"))
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, DiskError> {
        Ok(self.root.join(relative_disk_path(path)?))
    }

    /// Shell command that stores stdin at `target` via a temp file
    fn put_command(target: &Path) -> String {
        let p = Self::quote_path(target);
        let tmp = Self::quote_path(&PathBuf::from(format!("{}.ferry-tmp", target.display())));
        match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => format!(
                "mkdir -p {} && cat > {} && mv -f {} {}",
                Self::quote_path(parent),
                tmp,
                tmp,
                p
            ),
            _ => format!("cat > {} && mv -f {} {}", tmp, tmp, p),
        }
    }

    /// Run a command on the remote host via SSH
    fn run_command(&self, command: &str, input: Option<&[u8]>) -> Result<(), DiskError> {
        tracing::trace!(destination = %self.destination, command, "ssh");
        let mut child = Command::new("ssh")
            .arg(&self.destination)
            .arg(command)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DiskError::ConnectionError(format!("cannot start ssh: {}", e)))?;

        if let Some(bytes) = input {
            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(bytes)
                    .map_err(|e| DiskError::ConnectionError(e.to_string()))?;
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| DiskError::ConnectionError(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DiskError::CommandFailed(format!(
                "ssh {}: {}",
                self.destination,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

impl RemoteDisk for SshDisk {
    fn display_name(&self) -> String {
        format!("{}:{}", self.destination, self.root.display())
    }

    fn put(&self, path: &str, content: &[u8]) -> Result<(), DiskError> {
        let target = self.resolve(path)?;
        self.run_command(&Self::put_command(&target), Some(content))
    }

    fn delete(&self, path: &str) -> Result<(), DiskError> {
        let target = self.resolve(path)?;
        self.run_command(&format!("rm -f {}", Self::quote_path(&target)), None)
    }
}
