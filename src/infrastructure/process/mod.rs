//! Process Implementations

mod shell;

pub use shell::ShellRunner;
