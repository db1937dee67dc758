//! Ollama client for text generation.
//!
//! Calls `POST {host}/api/generate` with `stream: false`. Each request
//! carries the last `context_window` queries so follow-up questions have
//! some conversational grounding.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use ir_protocol::GenerationIntent;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::backend::GenerationBackend;
use crate::config::OllamaConfig;
use crate::error::{GenerationError, GenerationResult};
use crate::prompt;

/// Ollama generate API request body.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
    num_predict: u32,
}

/// Ollama generate API response (only fields we need).
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Client for a local Ollama server.
pub struct OllamaGenerator {
    client: reqwest::Client,
    config: OllamaConfig,
    history: Mutex<VecDeque<String>>,
}

impl std::fmt::Debug for OllamaGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OllamaGenerator {
    pub fn new(mut config: OllamaConfig) -> GenerationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        config.temperature = config.temperature.clamp(0.0, 1.0);
        config.max_tokens = config.max_tokens.max(1);
        Ok(Self {
            client,
            config,
            history: Mutex::new(VecDeque::new()),
        })
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Update sampling parameters. Temperature is clamped to 0.0 - 1.0 and
    /// `max_tokens` to at least 1.
    pub fn set_parameters(&mut self, temperature: f64, max_tokens: u32) {
        self.config.temperature = temperature.clamp(0.0, 1.0);
        self.config.max_tokens = max_tokens.max(1);
    }

    /// Queries currently held as context, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.lock_history().iter().cloned().collect()
    }

    fn lock_history(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remember(&self, query: &str) {
        let window = self.config.context_window;
        if window == 0 {
            return;
        }
        let mut history = self.lock_history();
        history.push_back(query.to_string());
        while history.len() > window {
            history.pop_front();
        }
    }

    fn model_for(&self, intent: GenerationIntent) -> &str {
        match intent {
            GenerationIntent::CodeGeneration => &self.config.code_model,
            _ => &self.config.model,
        }
    }
}

#[async_trait]
impl GenerationBackend for OllamaGenerator {
    async fn generate(&self, intent: GenerationIntent, query: &str) -> GenerationResult<String> {
        if !self.config.enabled {
            return Err(GenerationError::Disabled);
        }

        let model = self.model_for(intent);
        let full_prompt = {
            let history = self.lock_history();
            prompt::compose(
                model,
                history.iter().map(String::as_str),
                &prompt::shape(intent, query),
            )
        };
        let url = format!("{}/api/generate", self.config.host.trim_end_matches('/'));
        let body = GenerateRequest {
            model,
            prompt: &full_prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens,
            },
        };

        debug!(%model, %intent, "requesting generation");
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "ollama returned non-200");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)?;
        let text = prompt::clean(&parsed.response);
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        self.remember(query);
        Ok(text)
    }

    fn clear_context(&self) {
        self.lock_history().clear();
    }
}
