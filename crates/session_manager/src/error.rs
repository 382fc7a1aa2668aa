//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Bad local input. Never reaches the service; the session state is
    /// unchanged.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The document service answered with a failure.
    #[error("Service error: {0}")]
    Service(#[from] document_client::ClientError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
