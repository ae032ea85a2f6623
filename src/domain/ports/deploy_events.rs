//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress narration, JSON event streams, and debugging.

use std::path::PathBuf;

use super::command_runner::CommandOutcome;

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeployStage {
    RunBefore,
    BuildArchive,
    UploadArtifacts,
    InvokeRemoteScript,
    DeleteRemoteScript,
    UploadExtraFiles,
    CleanupLocal,
}

impl DeployStage {
    /// All stages in the order the orchestrator runs them
    pub const ALL: [DeployStage; 7] = [
        DeployStage::RunBefore,
        DeployStage::BuildArchive,
        DeployStage::UploadArtifacts,
        DeployStage::InvokeRemoteScript,
        DeployStage::DeleteRemoteScript,
        DeployStage::UploadExtraFiles,
        DeployStage::CleanupLocal,
    ];

    /// Stable identifier for JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStage::RunBefore => "run_before",
            DeployStage::BuildArchive => "build_archive",
            DeployStage::UploadArtifacts => "upload_artifacts",
            DeployStage::InvokeRemoteScript => "invoke_remote_script",
            DeployStage::DeleteRemoteScript => "delete_remote_script",
            DeployStage::UploadExtraFiles => "upload_extra_files",
            DeployStage::CleanupLocal => "cleanup_local",
        }
    }

    /// Human-readable progress line
    pub fn describe(&self) -> &'static str {
        match self {
            DeployStage::RunBefore => "run commands before deployment",
            DeployStage::BuildArchive => "build release archive",
            DeployStage::UploadArtifacts => "upload archive and bootstrap script",
            DeployStage::InvokeRemoteScript => "run deployment on server",
            DeployStage::DeleteRemoteScript => "remove bootstrap script",
            DeployStage::UploadExtraFiles => "upload configured files",
            DeployStage::CleanupLocal => "clean up local archive",
        }
    }
}

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        server: String,
        destination: String,
        refresh: bool,
    },

    /// A pipeline stage began
    StageStarted { stage: DeployStage },

    /// A local pre-deploy command is about to run
    CommandStarted { command: String },

    /// A local pre-deploy command did not succeed (the run continues)
    CommandFailed {
        command: String,
        outcome: CommandOutcome,
    },

    /// Release archive was written
    ArchiveBuilt {
        path: PathBuf,
        entries: usize,
        size: u64,
        digest: String,
    },

    /// A file was written to the disk
    Uploaded { path: String, bytes: usize },

    /// The bootstrap script is being requested
    RemoteInvoked { url: String },

    /// One line of the remote execution log
    RemoteLog { line: String },

    /// A file was deleted from the disk
    RemoteDeleted { path: String },

    /// Non-fatal problem
    Warning { message: String },

    /// A stage failed; the run stops here
    Failed { stage: DeployStage, error: String },

    /// Deploy completed
    Completed {
        uploaded_count: usize,
        remote_log_lines: usize,
        warning_count: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - ConsoleEventSink: progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
