//! Error types for shape encoding and decoding.

use thiserror::Error;

/// Errors raised while converting shapes to and from JSON.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// The underlying JSON encoder or decoder failed.
    ///
    /// Malformed input or a document missing a field required by the target
    /// shape ends up here, unchanged.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ShapeError>;
