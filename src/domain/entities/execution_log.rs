//! Remote execution log
//!
//! The bootstrap script answers with a JSON array of the output lines its
//! commands produced.

/// Ordered output lines reported by the bootstrap script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionLog {
    lines: Vec<String>,
}

impl ExecutionLog {
    /// Parse a response body
    ///
    /// The body must be a JSON array of strings. An empty (or whitespace)
    /// body is an empty log.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        let lines: Vec<String> = serde_json::from_str(body)?;
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
