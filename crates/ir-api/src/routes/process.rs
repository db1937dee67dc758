//! Utterance processing endpoint.

use axum::Json;
use axum::extract::State;
use ir_protocol::{Category, Classification, GenerationIntent, Suggestion};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for processing an utterance.
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    /// Natural-language input.
    #[serde(default)]
    pub command: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub request_id: Uuid,
    /// `system`, `generation` or `unclear`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub confidence: f64,
    /// Command result, generated text, or the unclear notice.
    pub result: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<GenerationIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

/// POST /api/v1/process: classify an utterance and act on it.
pub async fn process(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> ApiResult<Json<ProcessResponse>> {
    let text = req.command.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("command must not be empty".into()));
    }

    let reply = state.assistant.handle(text).await?;
    let request_id = Uuid::now_v7();

    let mut response = ProcessResponse {
        request_id,
        kind: reply.classification.kind(),
        confidence: reply.classification.confidence(),
        result: reply.response,
        success: reply.success,
        category: None,
        command: None,
        intent: None,
        suggestions: None,
    };
    match reply.classification {
        Classification::System(m) => {
            response.category = Some(m.category);
            response.command = Some(m.command);
        }
        Classification::Generation(g) => response.intent = Some(g.intent),
        Classification::Unclear(u) => response.suggestions = Some(u.suggestions),
    }

    tracing::info!(
        %request_id,
        kind = response.kind,
        confidence = response.confidence,
        success = response.success,
        "utterance processed"
    );
    Ok(Json(response))
}
