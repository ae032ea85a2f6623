//! Tests for the config module

use super::*;
use crate::error::FerryError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const FULL: &str = r#"
before = ["npm run build"]
includes = ["app", "public", "vendor"]
excludes = ["node_modules", "*.log"]
remote = ["php artisan config:cache"]
purge_excludes = ["uploads"]
staging_dir = "build/.ferry"

[disks.production]
driver = "ssh"
host = "deploy@example.com"
root = "/var/www/example"

[disks.share]
driver = "local"
root = "/mnt/share/site"

[servers.production]
disk = "production"
deploy-url = "https://example.com"
php-cli = "/usr/bin/php"
purge_excludes = ["storage"]
timeout_secs = 600

[servers.production.uploads]
".env.production" = ".env"

[servers.staging]
disk = "share"
deploy-url = "https://staging.example.com/"
migrate = false
"#;

fn parse(content: &str) -> (FerryConfig, Vec<ConfigWarning>) {
    parse_with_warnings(content, Path::new("ferry.toml")).unwrap()
}

#[test]
fn test_config_default_is_empty() {
    let config = FerryConfig::default();

    assert!(config.servers.is_empty());
    assert!(config.includes.is_empty());
    assert_eq!(config.staging_dir(), Path::new(".ferry"));
}

#[test]
fn test_config_parse_full_file() {
    let (config, warnings) = parse(FULL);

    assert!(warnings.is_empty(), "{warnings:?}");
    assert_eq!(config.before, vec!["npm run build"]);
    assert_eq!(config.includes.len(), 3);
    assert_eq!(config.staging_dir(), Path::new("build/.ferry"));

    let production = config.server("production").unwrap();
    assert_eq!(production.deploy_url, "https://example.com");
    assert_eq!(production.php_cli, "/usr/bin/php");
    assert_eq!(production.timeout_secs, Some(600));
    assert!(production.migrate);
    assert_eq!(production.uploads[".env.production"], ".env");

    assert_eq!(
        config.disk_for("production").unwrap(),
        &DiskConfig::Ssh {
            host: "deploy@example.com".to_string(),
            root: PathBuf::from("/var/www/example"),
        }
    );
}

#[test]
fn test_server_defaults() {
    let (config, _) = parse(FULL);
    let staging = config.server("staging").unwrap();

    assert_eq!(staging.php_cli, "php");
    assert!(!staging.migrate);
    assert!(staging.timeout_secs.is_none());
    assert!(staging.uploads.is_empty());
}

#[test]
fn test_purge_excludes_are_appended() {
    let (config, _) = parse(FULL);
    let production = config.server("production").unwrap();

    assert_eq!(
        config.purge_excludes_for(production),
        vec!["uploads", "storage"]
    );
}

#[test]
fn test_unknown_server_suggests_name() {
    let (config, _) = parse(FULL);

    let err = config.server("prodution").unwrap_err();
    assert!(matches!(
        err,
        FerryError::UnknownServer { suggestion: Some(ref s), .. } if s == "production"
    ));
}

#[test]
fn test_unknown_disk_is_error() {
    let (config, _) = parse(
        r#"
[servers.production]
disk = "missing"
deploy-url = "https://example.com"
"#,
    );

    let err = config.disk_for("production").unwrap_err();
    assert_eq!(
        err.to_string(),
        "server 'production' refers to unknown disk 'missing'"
    );
}

#[test]
fn test_unknown_keys_become_warnings() {
    let (_, warnings) = parse(
        r#"
includs = ["app"]

[servers.production]
disk = "production"
deploy-url = "https://example.com"
timout_secs = 10
"#,
    );

    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].key, "includs");
    assert_eq!(warnings[0].suggestion.as_deref(), Some("includes"));
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[1].path, "servers.production.timout_secs");
    assert_eq!(warnings[1].suggestion.as_deref(), Some("timeout_secs"));
}

#[test]
fn test_warning_display() {
    let warning = ConfigWarning {
        path: "servers.production.timout_secs".to_string(),
        key: "timout_secs".to_string(),
        file: PathBuf::from("ferry.toml"),
        line: Some(7),
        suggestion: Some("timeout_secs".to_string()),
    };
    assert_eq!(
        warning.to_string(),
        "unknown config key 'servers.production.timout_secs' in ferry.toml:7 (did you mean 'timeout_secs'?)"
    );
}

#[test]
fn test_unknown_driver_is_parse_error() {
    let result = parse_with_warnings(
        r#"
[disks.cloud]
driver = "s3"
root = "bucket"
"#,
        Path::new("ferry.toml"),
    );
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_missing_deploy_url_is_parse_error() {
    let result = parse_with_warnings(
        r#"
[servers.production]
disk = "production"
"#,
        Path::new("ferry.toml"),
    );
    assert!(result.is_err());
}

#[test]
fn test_load_missing_file_is_config_error() {
    let dir = tempdir().unwrap();
    let err = FerryConfig::load(&dir.path().join("ferry.toml")).unwrap_err();
    assert!(matches!(err, FerryError::Config { .. }));
}

#[test]
fn test_load_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ferry.toml");
    fs::write(&path, FULL).unwrap();

    let (config, warnings) = FerryConfig::load_with_warnings(&path).unwrap();
    assert_eq!(config.servers.len(), 2);
    assert!(warnings.is_empty());
}

#[test]
fn test_resolve_config_path_precedence() {
    assert_eq!(
        resolve_config_path(Some(Path::new("cli.toml")), Some("env.toml".to_string())),
        PathBuf::from("cli.toml")
    );
    assert_eq!(
        resolve_config_path(None, Some("env.toml".to_string())),
        PathBuf::from("env.toml")
    );
    assert_eq!(
        resolve_config_path(None, Some("  ".to_string())),
        PathBuf::from(CONFIG_FILE)
    );
    assert_eq!(resolve_config_path(None, None), PathBuf::from("ferry.toml"));
}
