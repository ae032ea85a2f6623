//! Purge-exclusion patterns
//!
//! A purge pattern protects remote paths from deletion. It is a literal path
//! suffix anchored at a segment boundary: `uploads` protects `/x/public/uploads`
//! but not `/x/public/old-uploads`.

use std::fmt;

/// A normalized purge-exclusion pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PurgePattern(String);

impl PurgePattern {
    /// Normalize a raw pattern
    ///
    /// Leading/trailing slashes and empty or `.` segments are dropped.
    /// Returns `None` when nothing usable is left, or when the pattern
    /// contains `..`.
    pub fn new(raw: &str) -> Option<Self> {
        let mut segments = Vec::new();
        for segment in raw.trim().split('/') {
            match segment {
                "" | "." => continue,
                ".." => return None,
                s => segments.push(s),
            }
        }
        if segments.is_empty() {
            None
        } else {
            Some(Self(segments.join("/")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `path` ends with `/<pattern>`
    pub fn matches(&self, path: &str) -> bool {
        ends_with_segments(path, &self.0)
    }

    /// Proper leading prefixes of a nested pattern
    ///
    /// `storage/app/public` yields `storage` and `storage/app`: directories
    /// ending in one of these contain a protected path.
    pub fn ancestors(&self) -> Vec<String> {
        let segments: Vec<&str> = self.0.split('/').collect();
        (1..segments.len())
            .map(|n| segments[..n].join("/"))
            .collect()
    }
}

impl fmt::Display for PurgePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Suffix test shared by patterns and their ancestors
pub(crate) fn ends_with_segments(path: &str, suffix: &str) -> bool {
    path.strip_suffix(suffix)
        .is_some_and(|head| head.ends_with('/'))
}
