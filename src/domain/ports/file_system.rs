//! FileSystem port - abstraction over local file I/O
//!
//! The deploy flow reads upload sources, checks for a stale archive and
//! removes the staged archive through this trait so tests can substitute an
//! in-memory implementation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(std::io::Error),
}

impl FsError {
    /// Attach the offending path to an `io::Error`
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

/// Local file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory fakes in tests
pub trait FileSystem {
    /// Read file content as bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Check whether a regular file exists at `path`
    fn is_file(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;
}
