//! Terminal presentation: design tokens, capability detection and the
//! per-invocation output context.

pub mod context;
pub mod icon;
pub mod terminal;
pub mod theme;
