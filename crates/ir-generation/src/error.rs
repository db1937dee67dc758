//! Generation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("generation backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode generation response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("generation backend returned an empty response")]
    EmptyResponse,

    #[error("text generation is disabled")]
    Disabled,
}

pub type GenerationResult<T> = Result<T, GenerationError>;
