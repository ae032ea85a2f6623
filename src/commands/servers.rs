//! Servers command: list configured servers and where they deploy to

use std::path::Path;

use anyhow::Result;
use crossterm::style::Stylize;
use ferry::presentation::ColorWhen;
use ferry::ui::context::UiContext;
use ferry::ui::icon::Icon;
use ferry::ui::theme;
use ferry::FerryConfig;

pub fn cmd_servers(config_path: &Path, json: bool, color: Option<ColorWhen>) -> Result<()> {
    let config = super::load_config(config_path)?;

    if json {
        println!("{}", servers_json(&config));
        return Ok(());
    }

    let ui = UiContext::new(false, 0, color);
    if config.servers.is_empty() {
        println!(
            "{} No servers configured in {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            config_path.display()
        );
        return Ok(());
    }
    for (name, server) in &config.servers {
        let name = if ui.color {
            format!("{}", name.as_str().bold())
        } else {
            name.clone()
        };
        let disk = if ui.color {
            format!("{}", server.disk.as_str().with(theme::colors::DIM))
        } else {
            server.disk.clone()
        };
        println!(
            "{} {} {} {} ({})",
            Icon::Remote.colored(ui.color, ui.unicode),
            name,
            Icon::Arrow.colored(ui.color, ui.unicode),
            server.deploy_url,
            disk
        );
    }
    Ok(())
}

fn servers_json(config: &FerryConfig) -> serde_json::Value {
    let servers: Vec<_> = config
        .servers
        .iter()
        .map(|(name, server)| {
            serde_json::json!({
                "name": name,
                "disk": server.disk,
                "deploy_url": server.deploy_url,
                "migrate": server.migrate,
            })
        })
        .collect();
    serde_json::json!({
        "event": "servers",
        "command": "servers",
        "servers": servers,
    })
}
