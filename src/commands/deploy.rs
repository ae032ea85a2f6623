//! Deploy command entry point

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use ferry::domain::ports::DeployEventSink;
use ferry::infrastructure::{ConsoleEventSink, JsonEventSink};
use ferry::presentation::factory::{create_deploy_use_case, project_root_for};
use ferry::presentation::{build_plan, ColorWhen, DeployFlags};
use ferry::ui::context::UiContext;

pub fn cmd_deploy(
    config_path: &Path,
    server: &str,
    refresh: bool,
    debug: bool,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let ui = UiContext::new(json, verbose, color);
    let project_root = project_root_for(config_path);

    let plan = build_plan(
        &config,
        server,
        &project_root,
        DeployFlags { refresh, debug },
    )?;
    // stdout carries NDJSON only; command output moves to stderr
    let use_case = create_deploy_use_case(&config, server, &project_root, ui.json)?;

    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ui.color, ui.unicode))
    };

    let result = use_case.execute_with_events(&plan, sink)?;
    tracing::debug!(
        uploaded = result.uploaded.len(),
        warnings = result.warning_count(),
        "deploy finished"
    );
    Ok(())
}
