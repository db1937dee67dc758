//! Ollama settings, loadable from the `[ollama]` TOML table.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    /// Ollama HTTP API base URL.
    #[serde(default = "default_host")]
    pub host: String,
    /// Model for everything except code generation.
    #[serde(default = "default_model")]
    pub model: String,
    /// Model used for code generation requests.
    #[serde(default = "default_code_model")]
    pub code_model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Sampling temperature, clamped to 0.0 - 1.0.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens to generate (`num_predict`).
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Number of previous queries included in each prompt.
    #[serde(default = "default_context_window")]
    pub context_window: usize,
    /// Whether generation is enabled at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_host() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "llama3.2".into()
}
fn default_code_model() -> String {
    "codellama".into()
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_temperature() -> f64 {
    0.7
}
fn default_max_tokens() -> u32 {
    500
}
fn default_context_window() -> usize {
    5
}
fn default_enabled() -> bool {
    true
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: default_model(),
            code_model: default_code_model(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            context_window: default_context_window(),
            enabled: default_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = OllamaConfig::default();
        assert_eq!(config.host, "http://localhost:11434");
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.code_model, "codellama");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.context_window, 5);
        assert!(config.enabled);
    }

    #[test]
    fn config_from_toml() {
        let toml_str = r#"
host = "http://192.168.1.50:11434"
model = "mistral"
temperature = 0.2
enabled = false
"#;
        let config: OllamaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "http://192.168.1.50:11434");
        assert_eq!(config.model, "mistral");
        assert_eq!(config.code_model, "codellama");
        assert!((config.temperature - 0.2).abs() < f64::EPSILON);
        assert!(!config.enabled);
    }
}
