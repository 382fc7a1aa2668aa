//! Session Manager service

use std::sync::Arc;

use bytes::Bytes;
use doc_core::Turn;
use document_client::DocumentServiceTrait;
use tokio::sync::RwLock;

use crate::error::{Result, SessionError};
use crate::structs::Session;

/// Drives one document chat session against the document service.
///
/// Validation happens in the `Session` entity before any request is issued;
/// service outcomes re-enter the entity as events. Upload failures move the
/// session to `Failed`; query failures leave it `Ready`.
pub struct SessionManager {
    client: Arc<dyn DocumentServiceTrait>,
    session: Arc<RwLock<Session>>,
}

impl SessionManager {
    /// Create a new SessionManager over an empty session.
    pub fn new(client: Arc<dyn DocumentServiceTrait>) -> Self {
        Self {
            client,
            session: Arc::new(RwLock::new(Session::new())),
        }
    }

    /// Get a snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Upload a PDF and wait for the service to index it.
    ///
    /// Returns the insight points on success.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<Vec<String>> {
        let ticket = self.session.write().await.begin_upload(file_name)?;

        match self.client.upload(file_name, bytes).await {
            Ok(response) => {
                let mut session = self.session.write().await;
                session.on_upload_succeeded(ticket, response.file_id, response.summary);
                Ok(session.points().to_vec())
            }
            Err(err) => {
                self.session
                    .write()
                    .await
                    .on_upload_failed(ticket, err.to_string());
                Err(SessionError::Service(err))
            }
        }
    }

    /// Ask a question about the uploaded document.
    ///
    /// The user turn is appended optimistically before the request goes out.
    /// Returns the system answer turn, or `None` when the reply arrived after
    /// a new upload superseded the session it belonged to.
    pub async fn ask(&self, query: &str) -> Result<Option<Turn>> {
        let (ticket, document_id) = {
            let mut session = self.session.write().await;
            let ticket = session.submit_query(query)?;
            // Ready implies a document id; guard anyway.
            let document_id = session
                .document_id()
                .ok_or_else(|| SessionError::Validation("no document uploaded".to_string()))?
                .to_string();
            (ticket, document_id)
        };

        match self.client.chat(&document_id, query.trim()).await {
            Ok(answer) => {
                let mut session = self.session.write().await;
                let snippet = answer.grounding.map(|g| g.source_snippet);
                Ok(session
                    .on_query_answered(ticket, answer.text, snippet)
                    .cloned())
            }
            Err(err) => {
                self.session
                    .write()
                    .await
                    .on_query_failed(ticket, err.to_string());
                Err(SessionError::Service(err))
            }
        }
    }

    /// Fetch a rendering of `page` with `snippet` highlighted.
    pub async fn highlight(&self, page: u32, snippet: &str) -> Result<Bytes> {
        let document_id = {
            let session = self.session.read().await;
            if !session.state().accepts_queries() {
                return Err(SessionError::Validation(format!(
                    "cannot highlight yet: {}",
                    session.state().description()
                )));
            }
            session
                .document_id()
                .ok_or_else(|| SessionError::Validation("no document uploaded".to_string()))?
                .to_string()
        };

        let bytes = self.client.highlight(&document_id, page, snippet).await?;
        Ok(bytes)
    }
}
