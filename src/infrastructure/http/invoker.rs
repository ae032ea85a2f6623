//! Blocking HTTP invoker
//!
//! One GET per deployment, no retries. Without a configured timeout the
//! request waits as long as the server keeps the connection open, which is
//! what long migrations need.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::ports::{InvokeError, RemoteInvoker};

/// Longest body excerpt kept in a status error
const BODY_EXCERPT: usize = 512;

/// Triggers the bootstrap script with `reqwest`'s blocking client
pub struct HttpInvoker {
    client: Client,
}

impl HttpInvoker {
    pub fn new(timeout: Option<Duration>) -> Result<Self, InvokeError> {
        let client = Client::builder()
            .user_agent(concat!("ferry/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| InvokeError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_EXCERPT) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

impl RemoteInvoker for HttpInvoker {
    fn trigger(&self, url: &str) -> Result<String, InvokeError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| InvokeError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| InvokeError::Transport(e.to_string()))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(InvokeError::Status {
                code: status.as_u16(),
                body: excerpt(&body),
            });
        }
        Ok(body)
    }
}
