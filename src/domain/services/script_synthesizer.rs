//! Bootstrap script rendering
//!
//! A [`BootstrapScript`] is rendered through one embedded minijinja template.
//! Every value placed inside a PHP literal goes through the `php` filter,
//! which is the only place escaping happens.

use std::sync::LazyLock;

use minijinja::{context, AutoEscape, Environment};

use crate::domain::entities::{BootstrapScript, Migration, PurgeRules, RemoteCommand, PUBLIC_DIR};
use crate::domain::services::escaping::quote_single;
use crate::domain::services::purge_planner::PurgePlanner;
use crate::error::FerryResult;

const TEMPLATE_NAME: &str = "bootstrap.php";
const TEMPLATE_SOURCE: &str = include_str!("bootstrap.php.j2");

/// `php` filter: a single-quoted PHP literal
#[allow(clippy::needless_pass_by_value)]
fn php(value: String) -> String {
    quote_single(&value)
}

fn environment(source: &'static str) -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("php", php);
    env.add_template(TEMPLATE_NAME, source)?;
    Ok(env)
}

/// Compiled once; a syntax error is kept and returned by every render
static ENV: LazyLock<Result<Environment<'static>, minijinja::Error>> =
    LazyLock::new(|| environment(TEMPLATE_SOURCE));

fn template_env() -> FerryResult<&'static Environment<'static>> {
    ENV.as_ref()
        .map_err(|e| minijinja::Error::new(e.kind(), e.to_string()).into())
}

impl BootstrapScript {
    /// Render the PHP source of the script
    pub fn render(&self) -> FerryResult<String> {
        let planner = PurgePlanner::new(self.purge());
        let commands: Vec<&str> = self.commands().iter().map(RemoteCommand::as_str).collect();
        let template = template_env()?.get_template(TEMPLATE_NAME)?;
        let source = template.render(context! {
            version => env!("CARGO_PKG_VERSION"),
            archive => self.archive_name(),
            public_dir => PUBLIC_DIR,
            keep => planner.keep(),
            descend => planner.descend(),
            migration => self.migration().map(Migration::command_line),
            commands => commands,
        })?;
        Ok(source)
    }
}

/// Build and render a bootstrap script in one step
pub fn synthesize(
    archive_name: &str,
    purge_excludes: &[String],
    migration: Option<Migration>,
    custom_commands: &[String],
) -> FerryResult<String> {
    let script = BootstrapScript::new(
        archive_name,
        PurgeRules::new(purge_excludes),
        migration,
        custom_commands.iter().map(RemoteCommand::new).collect(),
    );
    script.render()
}
