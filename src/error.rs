//! Error types for Ferry
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Ferry operations
pub type FerryResult<T> = Result<T, FerryError>;

/// Main error type for Ferry operations
///
/// Every variant except [`FerryError::LocalCleanup`] aborts the deploy
/// pipeline at the stage where it occurs.
#[derive(Error, Debug)]
pub enum FerryError {
    /// Packing the release archive failed (or there was nothing to pack)
    #[error("failed to build archive: {message}")]
    ArchiveCreation { message: String },

    /// Writing or deleting a file on the remote disk failed
    #[error("upload of '{path}' failed: {message}")]
    Upload { path: String, message: String },

    /// The bootstrap script could not be invoked or answered badly
    #[error("remote invocation of {url} failed: {message}")]
    RemoteInvocation { url: String, message: String },

    /// Removing the local archive failed (reported, never fatal)
    #[error("failed to remove local archive {path}: {message}")]
    LocalCleanup { path: PathBuf, message: String },

    /// Configuration file could not be read or parsed
    #[error("invalid config {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Server name not present in the config
    #[error("unknown server '{name}'{}", suggestion_suffix(.suggestion))]
    UnknownServer {
        name: String,
        suggestion: Option<String>,
    },

    /// Server refers to a disk that is not configured
    #[error("server '{server}' refers to unknown disk '{disk}'")]
    UnknownDisk { server: String, disk: String },

    /// Rendering the bootstrap script template failed
    #[error("failed to render bootstrap script: {0}")]
    Template(#[from] minijinja::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FerryError {
    /// Whether this error stops the pipeline
    pub fn is_fatal(&self) -> bool {
        !matches!(self, FerryError::LocalCleanup { .. })
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}
