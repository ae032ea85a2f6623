//! Disk Implementations
//!
//! Concrete implementations of the RemoteDisk port.

mod local;
mod ssh;

pub use local::LocalDisk;
pub use ssh::SshDisk;

use std::path::{Component, PathBuf};

use crate::domain::ports::DiskError;

/// Validate a disk path and turn it into a relative `PathBuf`
///
/// Disk paths are relative to the disk root; absolute paths and `..` are
/// refused so nothing is ever written outside the root.
pub(crate) fn relative_disk_path(path: &str) -> Result<PathBuf, DiskError> {
    let mut out = PathBuf::new();
    for component in std::path::Path::new(path).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => {
                return Err(DiskError::IoError(format!(
                    "path '{}' escapes the disk root",
                    path
                )))
            }
        }
    }
    if out.as_os_str().is_empty() {
        return Err(DiskError::IoError("empty disk path".to_string()));
    }
    Ok(out)
}
