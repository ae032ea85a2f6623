//! Common test utilities for ferry integration tests.
//!
//! This module provides:
//! - `TestProject`: an isolated project directory with a local disk
//! - `Responder`: a one-shot HTTP server standing in for the web server

pub mod project;
pub mod responder;

pub use project::*;
pub use responder::*;
