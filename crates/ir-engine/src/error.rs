//! Engine error types.

use thiserror::Error;

use crate::feedback::StorageError;

/// Errors that abort a classification or feedback call.
///
/// "No match" is not an error: it is the `Unclear` classification.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("annotation unavailable: {0}")]
    AnnotationUnavailable(String),

    #[error("feedback storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
