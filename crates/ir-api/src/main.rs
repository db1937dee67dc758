//! Intent router HTTP API server.
//!
//! Listens on `IR_API_HOST:IR_API_PORT` and serves the assistant built from
//! the TOML file named by `IR_CONFIG` (defaults when unset).

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ir_api::config::ApiConfig;
use ir_api::routes;
use ir_api::state::AppState;
use ir_assistant::{Assistant, AssistantConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ir-api starting");

    let config = ApiConfig::from_env();

    let assistant_config = match &config.assistant_config {
        Some(path) => AssistantConfig::from_file(path)?,
        None => {
            tracing::warn!("IR_CONFIG not set, using default assistant configuration");
            AssistantConfig::default()
        }
    };
    let state = AppState::new(Assistant::from_config(&assistant_config)?);

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
