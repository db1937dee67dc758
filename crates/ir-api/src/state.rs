//! Shared application state for the Axum server.

use std::sync::Arc;

use ir_assistant::Assistant;
use ir_commands::{ExecutorConfig, SystemCommandExecutor};
use ir_engine::IntentEngine;
use ir_generation::MockGenerator;

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
#[derive(Clone, Debug)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant: Arc::new(assistant),
        }
    }

    /// In-memory learning, dry-run execution and an echoing generator.
    /// Nothing touches the host system (development and tests).
    pub fn in_memory() -> Self {
        let executor = SystemCommandExecutor::new(ExecutorConfig {
            dry_run: true,
            ..ExecutorConfig::default()
        });
        Self::new(Assistant::new(
            IntentEngine::with_defaults(),
            executor,
            Arc::new(MockGenerator::new()),
        ))
    }
}
