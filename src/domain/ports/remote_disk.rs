//! Remote Disk Port
//!
//! The storage back end that receives the archive, the bootstrap script and
//! the extra uploads. Paths are relative to the disk root (the release root).

/// Error raised by a disk implementation
#[derive(Debug, Clone)]
pub enum DiskError {
    /// File system error on the disk side
    IoError(String),
    /// Remote connection error
    ConnectionError(String),
    /// Command execution error
    CommandFailed(String),
}

impl std::fmt::Display for DiskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
            Self::ConnectionError(msg) => write!(f, "Connection error: {}", msg),
            Self::CommandFailed(msg) => write!(f, "Command failed: {}", msg),
        }
    }
}

impl std::error::Error for DiskError {}

/// Storage disk the deployment is written to
///
/// Implementations:
/// - `LocalDisk` - a directory (mounted share, local docroot)
/// - `SshDisk` - files piped over `ssh`
pub trait RemoteDisk {
    /// Short description used in progress output
    fn display_name(&self) -> String;

    /// Write `content` to `path`, creating parent directories as needed
    fn put(&self, path: &str, content: &[u8]) -> Result<(), DiskError>;

    /// Delete the file at `path`; deleting a missing file is not an error
    fn delete(&self, path: &str) -> Result<(), DiskError>;
}

impl<D: RemoteDisk + ?Sized> RemoteDisk for Box<D> {
    fn display_name(&self) -> String {
        (**self).display_name()
    }

    fn put(&self, path: &str, content: &[u8]) -> Result<(), DiskError> {
        (**self).put(path, content)
    }

    fn delete(&self, path: &str) -> Result<(), DiskError> {
        (**self).delete(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_error_display() {
        let err = DiskError::CommandFailed("ssh exited with 255".to_string());
        assert_eq!(err.to_string(), "Command failed: ssh exited with 255");
    }
}
