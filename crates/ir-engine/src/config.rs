//! Engine tuning knobs, loadable from the `[engine]` and `[feedback]` TOML tables.

use std::path::PathBuf;

use serde::Deserialize;

/// Thresholds and capacities for the classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Blended confidence must exceed this to classify as a system action.
    #[serde(default = "default_system_threshold")]
    pub system_threshold: f64,
    /// Generation score must exceed this to classify as a generation request.
    #[serde(default = "default_generation_threshold")]
    pub generation_threshold: f64,
    /// Confidence reported for `<app verb> <application>` inputs.
    #[serde(default = "default_app_confidence")]
    pub app_short_circuit_confidence: f64,
    /// Entries kept by the normalizer's LRU cache.
    #[serde(default = "default_cache_capacity")]
    pub normalizer_cache_capacity: usize,
    /// Suggestions returned for unclear input.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_system_threshold() -> f64 {
    0.6
}
fn default_generation_threshold() -> f64 {
    0.3
}
fn default_app_confidence() -> f64 {
    0.9
}
fn default_cache_capacity() -> usize {
    1000
}
fn default_max_suggestions() -> usize {
    3
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            system_threshold: default_system_threshold(),
            generation_threshold: default_generation_threshold(),
            app_short_circuit_confidence: default_app_confidence(),
            normalizer_cache_capacity: default_cache_capacity(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// Where learned confidence is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    /// JSON document holding the learning state.
    #[serde(default = "default_feedback_path")]
    pub path: PathBuf,
    /// When false the store lives in memory only.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_feedback_path() -> PathBuf {
    PathBuf::from("nlp_learning.json")
}
fn default_enabled() -> bool {
    true
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            path: default_feedback_path(),
            enabled: default_enabled(),
        }
    }
}
