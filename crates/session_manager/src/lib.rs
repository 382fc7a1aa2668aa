//! # Session Manager
//!
//! Owns the document chat session: transcript, insight points, turn-id
//! counter, and the lifecycle state machine. `SessionManager` drives the
//! async upload/ask/highlight flows against a `DocumentServiceTrait`
//! implementation.

pub mod error;
pub mod manager;
pub mod structs;

// Re-exports
pub use error::{Result, SessionError};
pub use manager::SessionManager;
pub use structs::{QueryTicket, Session, UploadTicket};
