//! API server configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Assistant TOML (engine, feedback, ollama, executor tables).
    #[serde(default)]
    pub assistant_config: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Load config from `IR_API_HOST`, `IR_API_PORT` and `IR_CONFIG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = match lookup("IR_API_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid IR_API_PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };
        Self {
            host: lookup("IR_API_HOST").unwrap_or(defaults.host),
            port,
            assistant_config: lookup("IR_CONFIG").map(PathBuf::from),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assistant_config: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.assistant_config.is_none());
    }

    #[test]
    fn reads_environment() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("IR_API_HOST", "127.0.0.1"),
            ("IR_API_PORT", "8080"),
            ("IR_CONFIG", "/etc/ir/assistant.toml"),
        ]));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.assistant_config,
            Some(PathBuf::from("/etc/ir/assistant.toml"))
        );
    }

    #[test]
    fn invalid_port_keeps_default() {
        let config = ApiConfig::from_lookup(lookup(&[("IR_API_PORT", "eighty")]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
    }
}
