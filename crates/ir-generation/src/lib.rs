//! Text generation for utterances classified as `Generation`.
//!
//! `GenerationBackend` is the seam the assistant talks to. The default
//! backend is `OllamaGenerator`, which calls a local Ollama server's
//! `/api/generate` endpoint with a prompt shaped by the detected intent.

pub mod backend;
pub mod config;
pub mod error;
pub mod mock;
pub mod ollama;
pub mod prompt;

pub use backend::GenerationBackend;
pub use config::OllamaConfig;
pub use error::{GenerationError, GenerationResult};
pub use mock::MockGenerator;
pub use ollama::OllamaGenerator;
