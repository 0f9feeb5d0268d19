//! Error taxonomy for graph operations
//!
//! Three caller-visible classes: validation errors abort the mutation with no
//! state change, format errors reject an import file wholesale, and
//! unavailability marks the degraded "local mode" where the in-memory graph
//! keeps working without persistence.

use thiserror::Error;

/// Errors surfaced by the engine, codecs, and persistence layer
#[derive(Debug, Error)]
pub enum GraphError {
    /// Invalid user input (missing label, empty property name, self-loop)
    #[error("{0}")]
    Validation(String),

    /// Import file failed structural validation
    #[error("invalid format: {0}")]
    Format(String),

    /// Persistence backend is not configured or not reachable
    #[error("persistence unavailable")]
    Unavailable,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        GraphError::Validation(message.into())
    }

    /// Shorthand for an import format error
    pub fn format(message: impl Into<String>) -> Self {
        GraphError::Format(message.into())
    }
}

/// Result type for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;
