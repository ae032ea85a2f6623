//! Domain Services
//!
//! Pure logic with no I/O: escaping, purge decisions and script rendering.

pub mod escaping;
mod purge_planner;
mod script_synthesizer;

pub use purge_planner::{
    hidden_to_delete, is_hidden, release_root_to_delete, PurgeDecision, PurgePlanner,
};
pub use script_synthesizer::synthesize;
