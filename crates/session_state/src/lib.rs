//! session_state - Lifecycle state machine for document chat sessions
//!
//! This crate provides the pure state machine governing the upload lifecycle
//! of a document chat session. It performs no I/O; callers feed it events and
//! react to the resulting transitions.

pub mod machine;

// Re-export commonly used types
pub use machine::{SessionEvent, SessionState, StateMachine, StateTransition};
