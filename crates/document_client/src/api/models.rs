//! Wire models for the document service API.

use serde::{Deserialize, Serialize};

/// Successful `/upload` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Opaque identifier the service assigned to the document.
    pub file_id: String,
    /// Insight points extracted from the document.
    pub summary: Vec<String>,
    /// Number of text chunks the service indexed.
    pub chunks_indexed: u64,
}

/// `/chat` request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub file_id: &'a str,
    pub query: &'a str,
}

/// Successful `/chat` response.
///
/// `grounding` absent means the service could not find the answer in the
/// document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding: Option<GroundingPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingPayload {
    pub source_snippet: String,
}

/// `/highlight` request body. Page numbering convention is owned by the
/// service; the client only requires `page >= 1`.
#[derive(Debug, Clone, Serialize)]
pub struct HighlightRequest<'a> {
    pub file_id: &'a str,
    pub page: u32,
    pub snippet: &'a str,
}
