//! Release archive entity

use std::path::{Path, PathBuf};

/// File name of the release archive, locally and on the disk
pub const ARCHIVE_NAME: &str = "deploy.tar.gz";

/// Default staging directory, relative to the project root
pub const DEFAULT_STAGING_DIR: &str = ".ferry";

/// A packed release, staged locally for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    path: PathBuf,
    entry_count: usize,
    size: u64,
    digest: String,
}

impl Archive {
    pub fn new(path: impl Into<PathBuf>, entry_count: usize, size: u64, digest: String) -> Self {
        Self {
            path: path.into(),
            entry_count,
            size,
            digest,
        }
    }

    /// Local staging path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of tar entries (files, directories, links)
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Compressed size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// `sha256:<hex>` of the compressed archive
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

/// Staging location of the archive for a project
pub fn staging_path(project_root: &Path, staging_dir: &Path) -> PathBuf {
    project_root.join(staging_dir).join(ARCHIVE_NAME)
}
