//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CommandOutcome, DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

fn outcome_json(outcome: &CommandOutcome) -> serde_json::Value {
    match outcome {
        CommandOutcome::Success => serde_json::json!({ "status": "success" }),
        CommandOutcome::Failed { code } => serde_json::json!({
            "status": "failed",
            "code": code,
        }),
        CommandOutcome::NotStarted { reason } => serde_json::json!({
            "status": "not_started",
            "reason": reason,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                server,
                destination,
                refresh,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "timestamp": now(),
                    "server": server,
                    "destination": destination,
                    "refresh": refresh,
                })
            }

            DeployEvent::StageStarted { stage } => {
                serde_json::json!({
                    "event": "stage",
                    "command": "deploy",
                    "stage": stage.as_str(),
                })
            }

            DeployEvent::CommandStarted { command } => {
                serde_json::json!({
                    "event": "command_start",
                    "command": "deploy",
                    "shell": command,
                })
            }

            DeployEvent::CommandFailed { command, outcome } => {
                serde_json::json!({
                    "event": "command_failed",
                    "command": "deploy",
                    "shell": command,
                    "outcome": outcome_json(&outcome),
                })
            }

            DeployEvent::ArchiveBuilt {
                path,
                entries,
                size,
                digest,
            } => {
                serde_json::json!({
                    "event": "archive_built",
                    "command": "deploy",
                    "path": path.display().to_string(),
                    "entries": entries,
                    "size": size,
                    "digest": digest,
                })
            }

            DeployEvent::Uploaded { path, bytes } => {
                serde_json::json!({
                    "event": "uploaded",
                    "command": "deploy",
                    "path": path,
                    "bytes": bytes,
                })
            }

            DeployEvent::RemoteInvoked { url } => {
                serde_json::json!({
                    "event": "remote_invoked",
                    "command": "deploy",
                    "url": url,
                })
            }

            DeployEvent::RemoteLog { line } => {
                serde_json::json!({
                    "event": "remote_log",
                    "command": "deploy",
                    "line": line,
                })
            }

            DeployEvent::RemoteDeleted { path } => {
                serde_json::json!({
                    "event": "remote_deleted",
                    "command": "deploy",
                    "path": path,
                })
            }

            DeployEvent::Warning { message } => {
                serde_json::json!({
                    "event": "warning",
                    "command": "deploy",
                    "message": message,
                })
            }

            DeployEvent::Failed { stage, error } => {
                serde_json::json!({
                    "event": "error",
                    "command": "deploy",
                    "stage": stage.as_str(),
                    "message": error,
                })
            }

            DeployEvent::Completed {
                uploaded_count,
                remote_log_lines,
                warning_count,
            } => {
                let status = if warning_count == 0 {
                    "success"
                } else {
                    "success_with_warnings"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "timestamp": now(),
                    "status": status,
                    "uploaded": uploaded_count,
                    "remote_log_lines": remote_log_lines,
                    "warnings": warning_count,
                })
            }
        };

        self.write_event(json);
    }
}
