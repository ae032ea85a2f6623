//! Render command: print the bootstrap script a deploy would upload

use std::path::Path;

use anyhow::Result;
use ferry::presentation::factory::project_root_for;
use ferry::presentation::{build_plan, DeployFlags};

pub fn cmd_render(config_path: &Path, server: &str, refresh: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let plan = build_plan(
        &config,
        server,
        &project_root_for(config_path),
        DeployFlags {
            refresh,
            debug: false,
        },
    )?;
    print!("{}", plan.bootstrap_script().render()?);
    Ok(())
}
