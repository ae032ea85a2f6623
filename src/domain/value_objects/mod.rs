//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod exclude_patterns;
mod purge_pattern;

pub use exclude_patterns::{ExcludeError, ExcludePatterns};
pub(crate) use purge_pattern::ends_with_segments;
pub use purge_pattern::PurgePattern;
