//! The assistant: one classified utterance in, one reply out.

use std::sync::Arc;

use ir_commands::SystemCommandExecutor;
use ir_engine::{EngineResult, FeedbackReceipt, IntentEngine};
use ir_generation::{GenerationBackend, OllamaGenerator};
use ir_protocol::Classification;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::AssistantConfig;

/// Reply text for input that is neither a command nor a generation request.
pub const UNCLEAR_RESPONSE: &str = "Unclear command. Please try again.";

/// What the assistant decided and what it produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantReply {
    pub classification: Classification,
    /// Command result, generated text, or the unclear notice.
    pub response: String,
    /// False when the command failed, generation failed, or the input
    /// was unclear.
    pub success: bool,
}

pub struct Assistant {
    engine: IntentEngine,
    executor: SystemCommandExecutor,
    generator: Arc<dyn GenerationBackend>,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("engine", &self.engine)
            .field("executor", &self.executor)
            .finish_non_exhaustive()
    }
}

impl Assistant {
    pub fn new(
        engine: IntentEngine,
        executor: SystemCommandExecutor,
        generator: Arc<dyn GenerationBackend>,
    ) -> Self {
        Self {
            engine,
            executor,
            generator,
        }
    }

    /// Engine with persisted learning, real process execution and Ollama.
    pub fn from_config(config: &AssistantConfig) -> anyhow::Result<Self> {
        let engine = IntentEngine::from_config(config.engine.clone(), &config.feedback);
        let executor = SystemCommandExecutor::new(config.executor.clone());
        let generator = OllamaGenerator::new(config.ollama.clone())?;
        info!(
            platform = ?executor.platform(),
            dry_run = config.executor.dry_run,
            ollama_enabled = config.ollama.enabled,
            model = %config.ollama.model,
            "assistant initialized"
        );
        Ok(Self::new(engine, executor, Arc::new(generator)))
    }

    /// Classify `text` and act on it.
    ///
    /// Errors only when the input cannot be annotated; command and
    /// generation failures are reported in the reply.
    pub async fn handle(&self, text: &str) -> EngineResult<AssistantReply> {
        let classification = self.engine.classify(text)?;

        let (response, success) = match &classification {
            Classification::System(m) => {
                let outcome = self.executor.execute(m.category, &m.command).await;
                (outcome.message, outcome.success)
            }
            Classification::Generation(g) => match self.generator.generate(g.intent, text).await {
                Ok(generated) => (generated, true),
                Err(e) => {
                    warn!(error = %e, intent = %g.intent, "generation failed");
                    (format!("Failed to generate response: {e}"), false)
                }
            },
            Classification::Unclear(_) => (UNCLEAR_RESPONSE.to_string(), false),
        };

        Ok(AssistantReply {
            classification,
            response,
            success,
        })
    }

    /// Record whether the reply to `text` was helpful.
    pub fn feedback(
        &self,
        text: &str,
        success: bool,
        correction: Option<&str>,
    ) -> EngineResult<FeedbackReceipt> {
        self.engine.provide_feedback(text, success, correction)
    }

    /// Record that `text` was misunderstood and what was meant instead.
    pub fn correct(&self, text: &str, correction: &str) -> EngineResult<FeedbackReceipt> {
        self.engine.provide_feedback(text, false, Some(correction))
    }

    /// Log a correction for `text` without judging the reply to it.
    pub fn record_correction(&self, text: &str, correction: &str) -> EngineResult<FeedbackReceipt> {
        self.engine.provide_correction(text, correction)
    }

    /// Forget the generator's conversation history.
    pub fn clear_context(&self) {
        self.generator.clear_context();
    }

    pub fn engine(&self) -> &IntentEngine {
        &self.engine
    }
}
