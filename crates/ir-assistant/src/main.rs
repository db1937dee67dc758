//! Intent router assistant: interactive terminal front end.
//!
//! Usage: `ir-assistant [config.toml]` (default `assistant.toml`; a missing
//! file means built-in defaults). Logs go to stderr as JSON so they do not
//! interleave with the conversation on stdout.

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use ir_assistant::{Assistant, AssistantConfig, repl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ir-assistant starting");

    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assistant.toml".to_string());
    let config = AssistantConfig::load_or_default(&config_path)?;

    // ── Wire engine, executor and generator ─────────────────────
    let assistant = Assistant::from_config(&config)?;

    let stdin = BufReader::new(tokio::io::stdin());
    repl::run(&assistant, stdin, tokio::io::stdout()).await?;

    // Every feedback call already persists; this catches a store whose
    // last write failed.
    if let Err(e) = assistant.engine().persist_learning() {
        tracing::warn!(error = %e, "failed to persist learning data on exit");
    }

    tracing::info!("ir-assistant stopped");
    Ok(())
}
