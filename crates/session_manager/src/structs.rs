//! Session data structures

use std::collections::HashSet;

use doc_core::Turn;
use serde::{Deserialize, Serialize};
use session_state::{SessionEvent, SessionState, StateMachine};
use uuid::Uuid;

use crate::error::{Result, SessionError};

/// Ticket identifying one in-flight upload. Completions carrying a ticket
/// other than the session's active one are stale and get discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadTicket(Uuid);

/// Client-generated request id for one in-flight chat query. Replies are
/// matched by ticket, not by arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryTicket(Uuid);

/// One document chat session.
///
/// All mutation goes through the operation methods below; each of them
/// validates against the embedded state machine before touching any field.
/// The methods are pure (no I/O) so the lifecycle rules are testable without
/// a service.
#[derive(Debug, Clone, Default)]
pub struct Session {
    document_id: Option<String>,
    points: Vec<String>,
    transcript: Vec<Turn>,
    next_turn_id: u64,
    file_name: Option<String>,
    active_upload: Option<UploadTicket>,
    pending_queries: HashSet<QueryTicket>,
    last_error: Option<String>,
    machine: StateMachine,
}

impl Session {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        self.machine.state()
    }

    /// Identifier assigned by the service on successful upload.
    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    /// Insight points from the last successful upload.
    pub fn points(&self) -> &[String] {
        &self.points
    }

    /// Chat transcript, in chronological order.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Most recent surfaced error, for display.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn alloc_turn_id(&mut self) -> u64 {
        let id = self.next_turn_id;
        self.next_turn_id += 1;
        id
    }

    /// Begin uploading a new document.
    ///
    /// Valid from `Empty`, `Ready`, and `Failed`; rejected while an upload is
    /// already in flight. The file name must end in a case-insensitive
    /// `.pdf`. On acceptance the insight points, transcript, and pending
    /// queries are cleared before the request goes out.
    pub fn begin_upload(&mut self, file_name: &str) -> Result<UploadTicket> {
        if !self.state().accepts_upload() {
            return Err(SessionError::Validation(
                "an upload is already in progress".to_string(),
            ));
        }
        if !file_name.to_lowercase().ends_with(".pdf") {
            return Err(SessionError::Validation(format!(
                "\"{file_name}\" is not a PDF file"
            )));
        }

        self.points.clear();
        self.transcript.clear();
        self.pending_queries.clear();
        self.last_error = None;
        self.file_name = Some(file_name.to_string());

        let ticket = UploadTicket(Uuid::new_v4());
        self.active_upload = Some(ticket);
        self.machine.handle_event(SessionEvent::UploadStarted);
        log::info!("upload started for {file_name}");
        Ok(ticket)
    }

    /// Record a successful upload and append the readiness announcement.
    ///
    /// Returns `None` when the ticket is stale (a newer upload superseded
    /// it), in which case nothing is applied.
    pub fn on_upload_succeeded(
        &mut self,
        ticket: UploadTicket,
        document_id: String,
        points: Vec<String>,
    ) -> Option<&Turn> {
        if self.active_upload != Some(ticket) {
            log::warn!("discarding stale upload completion for {document_id}");
            return None;
        }
        self.active_upload = None;
        self.document_id = Some(document_id);
        self.points = points;

        let name = self.file_name.as_deref().unwrap_or("document");
        let text = format!("PDF \"{name}\" uploaded. Summary and QA engine is now ready!");
        let id = self.alloc_turn_id();
        self.transcript.push(Turn::system(id, text));

        self.machine.handle_event(SessionEvent::UploadSucceeded);
        self.transcript.last()
    }

    /// Record a failed upload. Stale tickets are discarded.
    pub fn on_upload_failed(&mut self, ticket: UploadTicket, error: impl Into<String>) {
        if self.active_upload != Some(ticket) {
            log::warn!("discarding stale upload failure");
            return;
        }
        self.active_upload = None;
        let error = error.into();
        self.last_error = Some(error.clone());
        self.machine
            .handle_event(SessionEvent::UploadFailed { error });
    }

    /// Append the user turn for a query and register its ticket.
    ///
    /// Valid only in `Ready` with non-empty trimmed text; anything else is a
    /// validation error that leaves the session untouched.
    pub fn submit_query(&mut self, text: &str) -> Result<QueryTicket> {
        if !self.state().accepts_queries() {
            return Err(SessionError::Validation(format!(
                "cannot ask questions yet: {}",
                self.state().description()
            )));
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SessionError::Validation("query is empty".to_string()));
        }

        let id = self.alloc_turn_id();
        self.transcript.push(Turn::user(id, trimmed));

        let ticket = QueryTicket(Uuid::new_v4());
        self.pending_queries.insert(ticket);
        self.machine.handle_event(SessionEvent::QuerySubmitted);
        Ok(ticket)
    }

    /// Append the system answer for a pending query.
    ///
    /// `source_snippet` present marks the answer as grounded. Unknown or
    /// superseded tickets are discarded and `None` is returned.
    pub fn on_query_answered(
        &mut self,
        ticket: QueryTicket,
        text: String,
        source_snippet: Option<String>,
    ) -> Option<&Turn> {
        if !self.pending_queries.remove(&ticket) {
            log::warn!("discarding answer for unknown query ticket");
            return None;
        }

        let id = self.alloc_turn_id();
        let turn = match source_snippet {
            Some(snippet) => Turn::grounded(id, text, snippet),
            None => Turn::system(id, text),
        };
        self.transcript.push(turn);
        self.machine.handle_event(SessionEvent::QueryAnswered);
        self.transcript.last()
    }

    /// Record a failed query. The transcript is untouched and the session
    /// stays usable.
    pub fn on_query_failed(&mut self, ticket: QueryTicket, error: impl Into<String>) {
        if !self.pending_queries.remove(&ticket) {
            log::warn!("discarding failure for unknown query ticket");
            return;
        }
        let error = error.into();
        self.last_error = Some(error.clone());
        self.machine
            .handle_event(SessionEvent::QueryFailed { error });
    }
}
