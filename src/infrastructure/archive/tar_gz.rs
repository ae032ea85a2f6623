//! gzip-compressed tar archiver
//!
//! Walks the include paths in sorted order, so two builds of the same tree
//! produce the same entry order. Symlinks are stored as links.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::domain::entities::Archive;
use crate::domain::ports::{ArchiveRequest, Archiver};
use crate::domain::value_objects::ExcludePatterns;
use crate::error::{FerryError, FerryResult};

/// Writer that hashes and counts everything passing through
struct DigestWriter<W: Write> {
    inner: W,
    hasher: Sha256,
    written: u64,
}

impl<W: Write> DigestWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
            written: 0,
        }
    }

    fn finish(self) -> (W, String, u64) {
        let digest = format!("sha256:{:x}", self.hasher.finalize());
        (self.inner, digest, self.written)
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Archiver producing `.tar.gz` files with `tar` and `flate2`
#[derive(Debug, Clone, Copy, Default)]
pub struct TarGzArchiver;

impl TarGzArchiver {
    pub fn new() -> Self {
        Self
    }
}

/// Packing state for one build
struct Packer<'a, W: Write> {
    builder: tar::Builder<W>,
    root: &'a Path,
    staging_dir: &'a Path,
    excludes: ExcludePatterns,
    entries: usize,
}

impl<W: Write> Packer<'_, W> {
    fn skip(&self, full: &Path, rel: &Path, is_dir: bool) -> bool {
        full == self.staging_dir || self.excludes.is_excluded(rel, is_dir)
    }

    fn append(&mut self, rel: &Path) -> io::Result<()> {
        let full = self.root.join(rel);
        let meta = fs::symlink_metadata(&full)?;
        let is_dir = meta.is_dir();
        if self.skip(&full, rel, is_dir) {
            tracing::trace!(path = %rel.display(), "excluded");
            return Ok(());
        }

        self.builder.append_path_with_name(&full, rel)?;
        self.entries += 1;

        if is_dir {
            self.append_children(rel)?;
        }
        Ok(())
    }

    fn append_children(&mut self, rel: &Path) -> io::Result<()> {
        let dir = self.root.join(rel);
        let mut names: Vec<_> = fs::read_dir(&dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<_>>()?;
        names.sort();
        for name in names {
            self.append(&rel.join(name))?;
        }
        Ok(())
    }
}

/// Normalize an include path; `None` means the whole project root
fn normalize_include(include: &Path) -> FerryResult<Option<PathBuf>> {
    let mut out = PathBuf::new();
    for component in include.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => {
                return Err(FerryError::ArchiveCreation {
                    message: format!(
                        "include path '{}' must stay inside the project",
                        include.display()
                    ),
                })
            }
        }
    }
    Ok(if out.as_os_str().is_empty() {
        None
    } else {
        Some(out)
    })
}

fn creation_error(context: &str, err: impl std::fmt::Display) -> FerryError {
    FerryError::ArchiveCreation {
        message: format!("{}: {}", context, err),
    }
}

impl Archiver for TarGzArchiver {
    fn build(&self, request: &ArchiveRequest<'_>) -> FerryResult<Archive> {
        if request.includes.is_empty() {
            return Err(FerryError::ArchiveCreation {
                message: "no include paths configured".to_string(),
            });
        }

        let includes = request
            .includes
            .iter()
            .map(|i| normalize_include(i))
            .collect::<FerryResult<Vec<_>>>()?;
        for include in includes.iter().flatten() {
            if fs::symlink_metadata(request.root.join(include)).is_err() {
                return Err(FerryError::ArchiveCreation {
                    message: format!("include path '{}' does not exist", include.display()),
                });
            }
        }

        let excludes = ExcludePatterns::new(request.root, request.excludes)
            .map_err(|e| creation_error("invalid exclude pattern", e))?;

        let staging_dir = request
            .destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(staging_dir)
            .map_err(|e| creation_error("cannot create staging directory", e))?;
        match fs::remove_file(request.destination) {
            Ok(()) => tracing::debug!(path = %request.destination.display(), "removed previous archive"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(creation_error("cannot remove previous archive", e)),
        }

        let tmp = NamedTempFile::new_in(staging_dir)
            .map_err(|e| creation_error("cannot create temporary archive", e))?;
        let encoder = GzEncoder::new(DigestWriter::new(tmp), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        builder.follow_symlinks(false);

        let mut packer = Packer {
            builder,
            root: request.root,
            staging_dir,
            excludes,
            entries: 0,
        };
        for include in &includes {
            let result = match include {
                Some(rel) => packer.append(rel),
                None => packer.append_children(Path::new("")),
            };
            result.map_err(|e| creation_error("packing failed", e))?;
        }

        let entries = packer.entries;
        let encoder = packer
            .builder
            .into_inner()
            .map_err(|e| creation_error("cannot finish tar stream", e))?;
        let writer = encoder
            .finish()
            .map_err(|e| creation_error("cannot finish gzip stream", e))?;
        let (tmp, digest, size) = writer.finish();
        tmp.persist(request.destination)
            .map_err(|e| creation_error("cannot move archive into place", e.error))?;

        tracing::debug!(entries, size, %digest, "archive built");
        Ok(Archive::new(request.destination, entries, size, digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn request<'a>(
        root: &'a Path,
        includes: &'a [PathBuf],
        excludes: &'a [String],
        destination: &'a Path,
    ) -> ArchiveRequest<'a> {
        ArchiveRequest {
            root,
            includes,
            excludes,
            destination,
        }
    }

    #[test]
    fn empty_includes_fail() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join(".ferry/deploy.tar.gz");
        let err = TarGzArchiver::new()
            .build(&request(dir.path(), &[], &[], &dest))
            .unwrap_err();
        assert!(matches!(err, FerryError::ArchiveCreation { .. }));
    }

    #[test]
    fn missing_include_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join(".ferry/deploy.tar.gz");
        let includes = vec![PathBuf::from("app")];
        let err = TarGzArchiver::new()
            .build(&request(dir.path(), &includes, &[], &dest))
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn parent_include_is_rejected() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join(".ferry/deploy.tar.gz");
        let includes = vec![PathBuf::from("../elsewhere")];
        let err = TarGzArchiver::new()
            .build(&request(dir.path(), &includes, &[], &dest))
            .unwrap_err();
        assert!(err.to_string().contains("inside the project"));
    }

    #[test]
    fn digest_matches_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.php"), "<?php echo 1;").unwrap();
        let dest = dir.path().join(".ferry/deploy.tar.gz");
        let includes = vec![PathBuf::from("index.php")];

        let archive = TarGzArchiver::new()
            .build(&request(dir.path(), &includes, &[], &dest))
            .unwrap();

        let bytes = fs::read(&dest).unwrap();
        let expected = format!("sha256:{:x}", Sha256::digest(&bytes));
        assert_eq!(archive.digest(), expected);
        assert_eq!(archive.size(), bytes.len() as u64);
        assert_eq!(archive.entry_count(), 1);
    }

    #[test]
    fn normalize_include_handles_dot() {
        assert_eq!(normalize_include(Path::new(".")).unwrap(), None);
        assert_eq!(
            normalize_include(Path::new("./app/")).unwrap(),
            Some(PathBuf::from("app"))
        );
    }
}
