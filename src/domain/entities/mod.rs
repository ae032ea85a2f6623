//! Domain Entities
//!
//! - `Archive` - the packed release staged for upload
//! - `BootstrapScript` - what the remote script does, before rendering
//! - `ExecutionLog` - output lines reported back by the script

mod archive;
mod bootstrap_script;
mod execution_log;

pub use archive::{staging_path, Archive, ARCHIVE_NAME, DEFAULT_STAGING_DIR};
pub use bootstrap_script::{
    invocation_url, script_remote_path, BootstrapScript, Migration, PurgeRules, RemoteCommand,
    PUBLIC_DIR, SCRIPT_NAME,
};
pub use execution_log::ExecutionLog;
