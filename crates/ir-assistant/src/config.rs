//! Assistant configuration, loadable from TOML.
//!
//! Every table is optional:
//!
//! ```toml
//! [engine]
//! system_threshold = 0.6
//!
//! [feedback]
//! path = "nlp_learning.json"
//!
//! [ollama]
//! model = "llama3.2"
//!
//! [executor]
//! dry_run = true
//! ```

use std::path::Path;

use ir_commands::ExecutorConfig;
use ir_engine::{EngineConfig, FeedbackConfig};
use ir_generation::OllamaConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub executor: ExecutorConfig,
}

impl AssistantConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Like `from_file`, but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }
}
