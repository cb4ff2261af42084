pub mod json;

pub use json::{document_fingerprint, read_document, write_document, write_report};

use thiserror::Error;

/// Errors raised while persisting or loading documents.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid output path: {0}")]
    InvalidPath(String),
}
