use std::fmt;

use thiserror::Error;

/// Which client operation produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Chat,
    Highlight,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Chat => "chat",
            Self::Highlight => "highlight",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures raised by the document service client.
///
/// Every variant carries the operation tag so callers can surface which
/// request failed. Service error bodies are captured in full, never
/// swallowed, and the client never retries on its own.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The service answered with a non-success status.
    #[error("{operation} failed ({status}): {body}")]
    Service {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// The request never completed (connection, timeout, decode).
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Input rejected locally before any request was issued.
    #[error("invalid {operation} input: {reason}")]
    InvalidInput {
        operation: Operation,
        reason: String,
    },
}

impl ClientError {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Service { operation, .. }
            | Self::Transport { operation, .. }
            | Self::InvalidInput { operation, .. } => *operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
