//! Ferry CLI
//!
//! Usage: ferry <COMMAND>
//!
//! Commands:
//!   deploy   Deploy the project to a configured server
//!   render   Print the bootstrap script without deploying
//!   servers  List configured servers

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use ferry::presentation::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = commands::config_path(cli.config.as_deref());

    match cli.command {
        Commands::Deploy {
            server,
            refresh,
            debug,
        } => commands::deploy::cmd_deploy(
            &config_path,
            &server,
            refresh,
            debug,
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Render { server, refresh } => {
            commands::render::cmd_render(&config_path, &server, refresh)
        }
        Commands::Servers => commands::servers::cmd_servers(&config_path, cli.json, cli.color),
    }
}
