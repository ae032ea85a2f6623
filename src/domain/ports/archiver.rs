//! Archiver Port
//!
//! Packs the release into a single compressed archive.

use std::path::{Path, PathBuf};

use crate::domain::entities::Archive;
use crate::error::FerryResult;

/// What to pack and where to put it
#[derive(Debug, Clone, Copy)]
pub struct ArchiveRequest<'a> {
    /// Directory the include paths are relative to
    pub root: &'a Path,
    /// Files or directories to pack, relative to `root`
    pub includes: &'a [PathBuf],
    /// Exclude patterns (gitignore/tar glob syntax)
    pub excludes: &'a [String],
    /// Final location of the archive
    pub destination: &'a Path,
}

/// Builds a release archive
pub trait Archiver {
    /// Pack `request.includes` into `request.destination`
    ///
    /// Fails with `FerryError::ArchiveCreation` when there is nothing to pack
    /// or packing fails.
    fn build(&self, request: &ArchiveRequest<'_>) -> FerryResult<Archive>;
}
