//! Remote Invoker Port
//!
//! Triggers execution of the uploaded bootstrap script. The only
//! synchronisation with the remote side is the blocking response.

/// Error raised when the remote endpoint cannot be reached or refuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// Connection, DNS, TLS or timeout failure
    Transport(String),
    /// The endpoint answered with a non-success status
    Status { code: u16, body: String },
}

impl std::fmt::Display for InvokeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
            Self::Status { code, body } if body.is_empty() => write!(f, "HTTP {}", code),
            Self::Status { code, body } => write!(f, "HTTP {}: {}", code, body),
        }
    }
}

impl std::error::Error for InvokeError {}

/// Fires the remote script and returns the raw response body
pub trait RemoteInvoker {
    fn trigger(&self, url: &str) -> Result<String, InvokeError>;
}

impl<I: RemoteInvoker + ?Sized> RemoteInvoker for Box<I> {
    fn trigger(&self, url: &str) -> Result<String, InvokeError> {
        (**self).trigger(url)
    }
}
