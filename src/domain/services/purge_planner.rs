//! Purge decisions
//!
//! The bootstrap script decides what to delete on the server. This module
//! holds the same rules in Rust: the keep/descend lists it computes are the
//! ones embedded in the script, and the decision functions mirror the PHP
//! helpers so the rules can be exercised without a PHP runtime.

use crate::domain::entities::{PurgeRules, PUBLIC_DIR};
use crate::domain::value_objects::ends_with_segments;

/// What happens to one entry of the deployment directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeDecision {
    /// The running script itself
    KeepSelf,
    /// Matches a purge-exclusion pattern; the whole subtree survives
    Keep,
    /// Directory on the way to a protected path; purge its children instead
    Descend,
    Delete,
}

impl PurgeDecision {
    pub fn deletes(self) -> bool {
        matches!(self, PurgeDecision::Delete)
    }
}

/// Keep/descend lists compiled from [`PurgeRules`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgePlanner {
    keep: Vec<String>,
    descend: Vec<String>,
}

impl PurgePlanner {
    pub fn new(rules: &PurgeRules) -> Self {
        Self {
            keep: rules.keep_suffixes(),
            descend: rules.descend_suffixes(),
        }
    }

    pub fn keep(&self) -> &[String] {
        &self.keep
    }

    pub fn descend(&self) -> &[String] {
        &self.descend
    }

    /// Decide the fate of a non-hidden entry at absolute `path`
    pub fn decide(&self, path: &str, self_path: &str, is_dir: bool) -> PurgeDecision {
        if path == self_path {
            return PurgeDecision::KeepSelf;
        }
        if self.keep.iter().any(|k| ends_with_segments(path, k)) {
            return PurgeDecision::Keep;
        }
        if is_dir && self.descend.iter().any(|d| ends_with_segments(path, d)) {
            return PurgeDecision::Descend;
        }
        PurgeDecision::Delete
    }
}

/// Whether a directory entry name is hidden
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Hidden entries of the deployment directory that get deleted
///
/// Every dotfile goes except the `.` and `..` pseudo-entries.
pub fn hidden_to_delete<'a>(names: &[&'a str]) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|n| is_hidden(n) && *n != "." && *n != "..")
        .collect()
}

/// Release-root entries that get deleted before unpacking
///
/// Hidden entries are left alone; the fresh archive and `public` always stay.
pub fn release_root_to_delete<'a>(names: &[&'a str], archive_name: &str) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|n| !is_hidden(n) && *n != archive_name && *n != PUBLIC_DIR)
        .collect()
}
