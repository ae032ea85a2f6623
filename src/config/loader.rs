//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::FerryError;

use super::types::FerryConfig;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "ferry.toml";

/// Environment variable overriding the config path
pub const CONFIG_ENV: &str = "FERRY_CONFIG";

/// Failure to read or parse the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{message}")]
    Parse { path: PathBuf, message: String },
}

impl From<ConfigError> for FerryError {
    fn from(err: ConfigError) -> Self {
        match &err {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => {
                FerryError::Config {
                    file: path.clone(),
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Full dotted path of the unknown key (`servers.production.timout`)
    pub path: String,
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.path, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Pick the config file: explicit flag, then `FERRY_CONFIG`, then `./ferry.toml`
pub fn resolve_config_path(cli: Option<&Path>, env: Option<String>) -> PathBuf {
    if let Some(path) = cli {
        return path.to_path_buf();
    }
    match env {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(CONFIG_FILE),
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(FerryConfig, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_with_warnings(&content, path)
}

/// Parse config text; `path` is only used for messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(FerryConfig, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: FerryConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
                path: path_str,
            }
        })
        .collect();

    Ok((config, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "before",
        "includes",
        "excludes",
        "remote",
        "purge_excludes",
        "staging_dir",
        "disks",
        "driver",
        "host",
        "root",
        "servers",
        "disk",
        "deploy-url",
        "php-cli",
        "uploads",
        "timeout_secs",
        "migrate",
    ];

    suggest_name(unknown, CANDIDATES.iter().copied())
}

/// Closest candidate within edit distance 2
pub(crate) fn suggest_name<'a>(
    unknown: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("migrate", "migrate"), 0);
        assert_eq!(levenshtein("migrat", "migrate"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }

    #[test]
    fn suggest_name_ignores_far_candidates() {
        assert_eq!(
            suggest_name("prodution", ["production", "staging"]),
            Some("production".to_string())
        );
        assert_eq!(suggest_name("qa", ["production", "staging"]), None);
    }
}
