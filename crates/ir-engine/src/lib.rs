//! Classification and adaptive-confidence engine.
//!
//! Routes free-text utterances to a system action, a generation request,
//! or an unclear result with ranked suggestions:
//!
//! - **Matcher**: app-verb short-circuit, then Ratcliff/Obershelp similarity
//!   against every catalog phrase, blended with learned confidence.
//! - **Generation scorer**: additive question/imperative heuristics.
//! - **Suggestion ranker**: token-overlap candidates ranked by context score.
//! - **Feedback store**: per-input learned confidence, persisted as JSON.

pub mod annotator;
pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod generation;
pub mod matcher;
pub mod normalizer;
pub mod similarity;
pub mod suggest;

pub use annotator::{Annotator, LexiconAnnotator};
pub use catalog::CommandCatalog;
pub use config::{EngineConfig, FeedbackConfig};
pub use engine::IntentEngine;
pub use error::{EngineError, EngineResult};
pub use feedback::{
    FeedbackReceipt, FeedbackStorage, FeedbackStore, JsonFileStorage, MemoryStorage, StorageError,
};
