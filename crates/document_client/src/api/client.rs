use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use doc_core::Config;
use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

use crate::api::models::{ChatAnswer, ChatRequest, HighlightRequest, UploadResponse};
use crate::client_trait::DocumentServiceTrait;
use crate::error::{ClientError, Operation, Result};

/// reqwest-backed implementation of the document service boundary.
///
/// One `reqwest::Client` is built at construction and reused for every call.
/// Failures are normalized uniformly: a non-success status becomes
/// `ClientError::Service` carrying the operation tag and the full error body.
/// Retry policy, if any, belongs to callers.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    client: Client,
    api_base: String,
}

impl DocumentClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|source| ClientError::Transport {
                operation: Operation::Upload,
                source,
            })?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_base, endpoint)
    }

    fn transport(operation: Operation) -> impl FnOnce(reqwest::Error) -> ClientError {
        move |source| {
            error!("{} request failed: {}", operation, source);
            ClientError::Transport { operation, source }
        }
    }

    /// Pass a success response through, or drain the full error body into a
    /// `Service` error.
    async fn check_status(operation: Operation, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .map_err(Self::transport(operation))?;
        error!("{} failed with status {}: {}", operation, status, body);
        Err(ClientError::Service {
            operation,
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl DocumentServiceTrait for DocumentClient {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadResponse> {
        let operation = Operation::Upload;
        info!("uploading {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .map_err(Self::transport(operation))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(Self::transport(operation))?;

        let response = Self::check_status(operation, response).await?;
        let upload: UploadResponse = response.json().await.map_err(Self::transport(operation))?;
        info!(
            "upload complete: file_id={} chunks_indexed={}",
            upload.file_id, upload.chunks_indexed
        );
        Ok(upload)
    }

    async fn chat(&self, file_id: &str, query: &str) -> Result<ChatAnswer> {
        let operation = Operation::Chat;
        if query.trim().is_empty() {
            return Err(ClientError::InvalidInput {
                operation,
                reason: "query must be non-empty".to_string(),
            });
        }

        debug!("chat request for file_id={}", file_id);
        let response = self
            .client
            .post(self.url("chat"))
            .json(&ChatRequest { file_id, query })
            .send()
            .await
            .map_err(Self::transport(operation))?;

        let response = Self::check_status(operation, response).await?;
        response.json().await.map_err(Self::transport(operation))
    }

    async fn highlight(&self, file_id: &str, page: u32, snippet: &str) -> Result<Bytes> {
        let operation = Operation::Highlight;
        if page < 1 {
            return Err(ClientError::InvalidInput {
                operation,
                reason: "page must be >= 1".to_string(),
            });
        }
        if snippet.trim().is_empty() {
            return Err(ClientError::InvalidInput {
                operation,
                reason: "snippet must be non-empty".to_string(),
            });
        }

        debug!("highlight request for file_id={} page={}", file_id, page);
        let response = self
            .client
            .post(self.url("highlight"))
            .json(&HighlightRequest {
                file_id,
                page,
                snippet,
            })
            .send()
            .await
            .map_err(Self::transport(operation))?;

        let response = Self::check_status(operation, response).await?;
        response.bytes().await.map_err(Self::transport(operation))
    }
}
