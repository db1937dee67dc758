//! Assistant front end: classify an utterance, then execute it, generate
//! a response for it, or offer suggestions.

pub mod assistant;
pub mod config;
pub mod render;
pub mod repl;

pub use assistant::{Assistant, AssistantReply, UNCLEAR_RESPONSE};
pub use config::AssistantConfig;
