//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--config, --json, --color, --verbose) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ferry - one-shot deployments through a disk and an HTTP endpoint
#[derive(Parser, Debug)]
#[command(name = "ferry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: $FERRY_CONFIG, then ./ferry.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events instead of progress lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the project to a configured server
    Deploy {
        /// Server name from the config
        server: String,

        /// Reset and reseed the database instead of migrating forward
        #[arg(long)]
        refresh: bool,

        /// Do not collect the remote execution log (collected by default)
        #[arg(long = "no-debug", action = clap::ArgAction::SetFalse)]
        debug: bool,
    },

    /// Print the bootstrap script a deploy would upload, without deploying
    Render {
        /// Server name from the config
        server: String,

        /// Render the database refresh variant
        #[arg(long)]
        refresh: bool,
    },

    /// List configured servers
    Servers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_deploy() {
        let cli = Cli::try_parse_from(["ferry", "deploy", "production"]).unwrap();
        match cli.command {
            Commands::Deploy {
                server,
                refresh,
                debug,
            } => {
                assert_eq!(server, "production");
                assert!(!refresh);
                assert!(debug);
            }
            other => panic!("Expected Deploy command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_deploy_flags() {
        let cli =
            Cli::try_parse_from(["ferry", "deploy", "production", "--refresh", "--no-debug"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Deploy {
                refresh: true,
                debug: false,
                ..
            }
        ));
    }

    #[test]
    fn test_cli_debug_is_not_a_flag() {
        assert!(Cli::try_parse_from(["ferry", "deploy", "production", "--debug"]).is_err());
    }

    #[test]
    fn test_cli_deploy_requires_server() {
        assert!(Cli::try_parse_from(["ferry", "deploy"]).is_err());
    }

    #[test]
    fn test_cli_parse_render() {
        let cli = Cli::try_parse_from(["ferry", "render", "staging", "--refresh"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Render { ref server, refresh: true } if server == "staging"
        ));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ferry",
            "servers",
            "--json",
            "--config",
            "deploy/ferry.toml",
            "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("deploy/ferry.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Servers));
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["ferry", "--color", "never", "servers"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }
}
