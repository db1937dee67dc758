//! Executor settings, loadable from the `[executor]` TOML table.

use serde::Deserialize;

use crate::platform::Platform;

#[derive(Debug, Clone, Deserialize)]
pub struct ExecutorConfig {
    /// Report what would run without spawning anything.
    #[serde(default)]
    pub dry_run: bool,
    /// Per-command timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Target platform; detected from the build target when unset.
    #[serde(default)]
    pub platform: Option<Platform>,
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            timeout_secs: default_timeout_secs(),
            platform: None,
        }
    }
}
