//! Error types for the request boundary
//!
//! The search itself cannot fail; every error here is raised while
//! decoding or validating input before it reaches the core.

/// Errors surfaced at the boundary
#[derive(thiserror::Error, Debug)]
pub enum GomokuError {
    /// Malformed board, dimensions, depth or settings
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Request or config could not be parsed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Config or request file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for boundary operations
pub type Result<T> = std::result::Result<T, GomokuError>;
