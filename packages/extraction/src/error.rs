//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Every failure
//! propagates to the caller; nothing is retried or swallowed here.
//! A field the model could not identify is NOT an error — it comes back
//! as [`crate::FieldValue::Unknown`].

use thiserror::Error;

/// Errors that can occur during extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Missing or invalid configuration (e.g. no API key). Fatal at
    /// startup, raised before any remote call is attempted.
    #[error("config error: {0}")]
    Config(String),

    /// The completion service call failed (network, auth, rate limit).
    #[error("completion service error: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service replied, but the reply does not fit the declared shape.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
