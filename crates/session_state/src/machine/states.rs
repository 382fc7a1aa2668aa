//! Session states - Defines all possible states of a document chat session

use serde::{Deserialize, Serialize};

/// Defines the possible states of a session's upload lifecycle.
///
/// Chat activity never changes the lifecycle state; only upload outcomes do.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No document has been uploaded yet.
    Empty,

    /// An upload is in flight; the service has not responded.
    Uploading,

    /// A document is indexed and the session accepts chat queries.
    Ready,

    /// The last upload failed. Recoverable: a new upload re-enters Uploading.
    Failed {
        error_message: String,
        failed_at: String, // ISO timestamp
    },
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Empty
    }
}

impl SessionState {
    /// Check if a new upload may begin from this state.
    pub fn accepts_upload(&self) -> bool {
        !matches!(self, Self::Uploading)
    }

    /// Check if chat queries are valid in this state.
    pub fn accepts_queries(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Empty => "Waiting for a PDF",
            Self::Uploading => "Processing PDF",
            Self::Ready => "Ready for questions",
            Self::Failed { .. } => "Upload failed",
        }
    }
}
