use async_trait::async_trait;
use bytes::Bytes;

use crate::api::models::{ChatAnswer, UploadResponse};
use crate::error::Result;

/// Boundary seam to the external document service.
///
/// Implementations serialize inputs, issue exactly one outbound request per
/// call, and normalize every outcome into the `ClientError` vocabulary. No
/// retries, no partial results.
#[async_trait]
pub trait DocumentServiceTrait: Send + Sync {
    /// Upload a PDF payload for indexing.
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadResponse>;

    /// Ask a question about a previously uploaded document.
    async fn chat(&self, file_id: &str, query: &str) -> Result<ChatAnswer>;

    /// Retrieve a rendering of `page` with `snippet` highlighted.
    async fn highlight(&self, file_id: &str, page: u32, snippet: &str) -> Result<Bytes>;
}
