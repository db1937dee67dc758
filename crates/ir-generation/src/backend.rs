//! The generation backend seam.

use async_trait::async_trait;
use ir_protocol::GenerationIntent;

use crate::error::GenerationResult;

/// Produces text for a generation request.
///
/// Implemented by `OllamaGenerator` and `MockGenerator`.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate a response to `query`, shaped by `intent`.
    async fn generate(&self, intent: GenerationIntent, query: &str) -> GenerationResult<String>;

    /// Forget any conversation history the backend keeps.
    fn clear_context(&self) {}
}
