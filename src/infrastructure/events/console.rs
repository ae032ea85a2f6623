//! Console Event Sink
//!
//! Human-readable progress lines, one per event.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{CommandOutcome, DeployEvent, DeployEventSink};
use crate::ui::icon::Icon;
use crate::ui::theme;

/// Event sink that narrates a deploy on the terminal
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn stdout(color: bool, unicode: bool) -> Self {
        Self::with_writer(io::stdout(), color, unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool, unicode: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.with(theme::colors::DIM))
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.bold())
        } else {
            text.to_string()
        }
    }

    /// Text for one event
    pub fn render(&self, event: &DeployEvent) -> String {
        match event {
            DeployEvent::Started {
                server,
                destination,
                refresh,
            } => format!(
                "{} Deploying {} to {}{}",
                self.icon(Icon::Deploy),
                self.bold(server),
                destination,
                if *refresh {
                    " (refreshing database)"
                } else {
                    ""
                }
            ),
            DeployEvent::StageStarted { stage } => {
                format!("{} {}", self.icon(Icon::Progress), stage.describe())
            }
            DeployEvent::CommandStarted { command } => {
                format!("  {} {}", self.icon(Icon::Arrow), self.dim(&format!("$ {}", command)))
            }
            DeployEvent::CommandFailed { command, outcome } => format!(
                "  {} '{}' {}; continuing",
                self.icon(Icon::Warning),
                command,
                describe_outcome(outcome)
            ),
            DeployEvent::ArchiveBuilt {
                entries,
                size,
                digest,
                ..
            } => format!(
                "  {} {} entries, {} {}",
                self.icon(Icon::Arrow),
                entries,
                human_size(*size),
                self.dim(digest)
            ),
            DeployEvent::Uploaded { path, bytes } => format!(
                "  {} {} {}",
                self.icon(Icon::Arrow),
                path,
                self.dim(&human_size(*bytes as u64))
            ),
            DeployEvent::RemoteInvoked { url } => {
                format!("  {} GET {}", self.icon(Icon::Remote), url)
            }
            DeployEvent::RemoteLog { line } => format!("  - {}", line),
            DeployEvent::RemoteDeleted { path } => {
                format!("  {} removed {}", self.icon(Icon::Arrow), path)
            }
            DeployEvent::Warning { message } => {
                format!("{} {}", self.icon(Icon::Warning), message)
            }
            DeployEvent::Failed { stage, error } => format!(
                "{} {} failed: {}",
                self.icon(Icon::Error),
                stage.describe(),
                error
            ),
            DeployEvent::Completed {
                uploaded_count,
                remote_log_lines,
                warning_count,
            } => {
                let mut line = format!(
                    "{} Deployed ({} uploaded",
                    self.icon(Icon::Success),
                    uploaded_count
                );
                if *remote_log_lines > 0 {
                    line.push_str(&format!(", {} remote log lines", remote_log_lines));
                }
                if *warning_count > 0 {
                    line.push_str(&format!(", {} warnings", warning_count));
                }
                line.push(')');
                line
            }
        }
    }
}

fn describe_outcome(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Success => "succeeded".to_string(),
        CommandOutcome::Failed { code: Some(code) } => format!("exited with status {}", code),
        CommandOutcome::Failed { code: None } => "was terminated by a signal".to_string(),
        CommandOutcome::NotStarted { reason } => format!("could not start ({})", reason),
    }
}

/// Format a byte count with binary units
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let line = self.render(&event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
