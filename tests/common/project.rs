//! Isolated project environment for running the `ferry` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a ferry CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Non-empty stdout lines parsed as JSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not NDJSON: {l:?} ({e})\n{}", self.stderr))
            })
            .collect()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events()
            .iter()
            .map(|e| e["event"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

/// Temporary project whose `disk/` directory acts as the server's disk
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Path on the local disk
    pub fn disk_path(&self, relative: &str) -> PathBuf {
        self.root().join("disk").join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Write `ferry.toml` with one server `production` on a local disk
    pub fn config(&self, deploy_url: &str, extra_server_keys: &str, extra_top: &str) -> &Self {
        let content = format!(
            r#"{extra_top}

[disks.share]
driver = "local"
root = "disk"

[servers.production]
disk = "share"
deploy-url = "{deploy_url}"
{extra_server_keys}
"#
        );
        self.write("ferry.toml", &content)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_ferry"))
            .current_dir(self.root())
            .env_remove("FERRY_CONFIG")
            .args(args)
            .output()
            .unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
