//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `disk/` - Disks the release is written to (local directory, ssh)
//! - `archive/` - tar.gz archiver
//! - `http/` - Remote script invocation
//! - `process/` - Local shell commands
//! - `events/` - Console and JSON event sinks

pub mod archive;
pub mod disk;
pub mod events;
pub mod fs;
pub mod http;
pub mod process;

// Re-export for convenience
pub use archive::TarGzArchiver;
pub use disk::{LocalDisk, SshDisk};
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use http::HttpInvoker;
pub use process::ShellRunner;
