//! doc_core - Core types for the PDF chat client
//!
//! This crate provides the foundational types used across the session and
//! client crates:
//! - `turn` - Transcript turns, grounding evidence, render dispatch
//! - `config` - Client configuration

pub mod config;
pub mod turn;

// Re-export commonly used types
pub use config::Config;
pub use turn::{Author, Grounding, Turn, TurnPresentation};
