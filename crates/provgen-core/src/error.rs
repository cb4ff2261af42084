use thiserror::Error;

/// Core error type shared across provgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The document violates structural invariants.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    /// A JSON Schema could not be built or compiled.
    #[error("schema error: {0}")]
    Schema(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by provgen crates.
pub type Result<T> = std::result::Result<T, Error>;
