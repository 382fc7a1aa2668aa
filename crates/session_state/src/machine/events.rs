//! Session events - Defines events that trigger state transitions

use serde::{Deserialize, Serialize};

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    // ========== Upload Events ==========
    /// A validated upload request was accepted and issued to the service.
    UploadStarted,

    /// The service indexed the document and returned its summary.
    UploadSucceeded,

    /// The service rejected or failed the upload.
    UploadFailed { error: String },

    // ========== Chat Events ==========
    /// A user query was appended to the transcript and sent to the service.
    QuerySubmitted,

    /// The service answered a query.
    QueryAnswered,

    /// A query failed; the session stays usable.
    QueryFailed { error: String },
}

impl SessionEvent {
    /// Check if this is an error event.
    pub fn is_error_event(&self) -> bool {
        matches!(self, Self::UploadFailed { .. } | Self::QueryFailed { .. })
    }

    /// Check if this event belongs to the upload lifecycle.
    pub fn is_upload_event(&self) -> bool {
        matches!(
            self,
            Self::UploadStarted | Self::UploadSucceeded | Self::UploadFailed { .. }
        )
    }
}
