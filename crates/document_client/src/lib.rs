pub mod api;
pub mod client_trait;
pub mod error;

pub use api::client::DocumentClient;
pub use api::models::{ChatAnswer, GroundingPayload, UploadResponse};
pub use client_trait::DocumentServiceTrait;
pub use doc_core::Config;
pub use error::{ClientError, Operation};
