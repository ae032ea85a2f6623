//! Archive exclude patterns
//!
//! Matches the `excludes` config list using gitignore semantics, which also
//! covers the tar `--exclude` cases people write: `vendor` drops every
//! `vendor` entry at any depth, `*.log` drops log files, `storage/logs` is
//! anchored to the project root.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::path::Path;

/// Compiled set of exclude patterns
#[derive(Debug)]
pub struct ExcludePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExcludePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Compile `patterns`, interpreted relative to `root`.
    ///
    /// Blank entries and `#` comments are skipped.
    pub fn new(root: &Path, patterns: &[String]) -> Result<Self, ExcludeError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for pattern in patterns {
            let trimmed = pattern.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            builder
                .add_line(None, trimmed)
                .map_err(|e| ExcludeError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
            pattern_count += 1;
        }

        let matcher = builder
            .build()
            .map_err(|e| ExcludeError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a path (relative to the root) is excluded.
    ///
    /// `is_dir` should be true if the path is a directory. A path inside an
    /// excluded directory is excluded too.
    pub fn is_excluded(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.pattern_count == 0 {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when compiling exclude patterns.
#[derive(Debug)]
pub enum ExcludeError {
    /// A pattern has invalid syntax.
    InvalidPattern { pattern: String, message: String },
    /// Failed to build the matcher.
    BuildFailed(String),
}

impl fmt::Display for ExcludeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, message } => {
                write!(f, "invalid exclude pattern '{}': {}", pattern, message)
            }
            Self::BuildFailed(msg) => write!(f, "failed to build exclude matcher: {}", msg),
        }
    }
}

impl std::error::Error for ExcludeError {}
