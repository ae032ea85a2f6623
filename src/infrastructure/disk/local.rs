//! Local directory disk
//!
//! A disk rooted at a local directory: a mounted share, or the document root
//! on the same machine.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::relative_disk_path;
use crate::domain::ports::{DiskError, RemoteDisk};

/// Disk backed by a local directory
#[derive(Debug, Clone)]
pub struct LocalDisk {
    root: PathBuf,
}

impl LocalDisk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, DiskError> {
        Ok(self.root.join(relative_disk_path(path)?))
    }
}

impl RemoteDisk for LocalDisk {
    fn display_name(&self) -> String {
        format!("local:{}", self.root.display())
    }

    fn put(&self, path: &str, content: &[u8]) -> Result<(), DiskError> {
        let target = self.resolve(path)?;
        let parent = target
            .parent()
            .ok_or_else(|| DiskError::IoError(format!("no parent for {}", target.display())))?;
        std::fs::create_dir_all(parent).map_err(|e| DiskError::IoError(e.to_string()))?;

        // temp file in the same directory so the rename stays atomic
        let mut tmp =
            NamedTempFile::new_in(parent).map_err(|e| DiskError::IoError(e.to_string()))?;
        tmp.write_all(content)
            .map_err(|e| DiskError::IoError(e.to_string()))?;
        tmp.persist(&target)
            .map_err(|e| DiskError::IoError(e.error.to_string()))?;
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<(), DiskError> {
        let target = self.resolve(path)?;
        match std::fs::remove_file(&target) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DiskError::IoError(e.to_string())),
        }
    }
}
