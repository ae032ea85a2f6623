//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archiver;
pub mod command_runner;
pub mod deploy_events;
pub mod file_system;
pub mod remote_disk;
pub mod remote_invoker;

pub use archiver::{ArchiveRequest, Archiver};
pub use command_runner::{CommandOutcome, CommandRunner};
pub use deploy_events::{DeployEvent, DeployEventSink, DeployStage, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use remote_disk::{DiskError, RemoteDisk};
pub use remote_invoker::{InvokeError, RemoteInvoker};
