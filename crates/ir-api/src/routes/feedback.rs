//! Feedback and learning-state endpoints.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use ir_engine::FeedbackReceipt;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for feedback on an earlier utterance. At least one of
/// `success` and `correction` must be present.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub command: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub correction: Option<String>,
}

/// POST /api/v1/feedback: record whether an utterance was handled well,
/// or only what was meant instead.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> ApiResult<Json<FeedbackReceipt>> {
    let text = req.command.trim().to_string();
    if text.is_empty() {
        return Err(ApiError::BadRequest("command must not be empty".into()));
    }
    let correction = req
        .correction
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    if req.success.is_none() && correction.is_none() {
        return Err(ApiError::BadRequest(
            "feedback needs `success` or a `correction`".into(),
        ));
    }

    // Recording rewrites the learning file, so keep it off the async workers.
    let assistant = state.assistant.clone();
    let receipt = tokio::task::spawn_blocking(move || match req.success {
        Some(success) => assistant.feedback(&text, success, correction.as_deref()),
        None => assistant.record_correction(&text, correction.as_deref().unwrap_or_default()),
    })
    .await
    .map_err(|e| ApiError::Internal(format!("feedback task failed: {e}")))??;

    if let Some(warning) = &receipt.warning {
        tracing::warn!(%warning, "feedback not persisted");
    }
    Ok(Json(receipt))
}

#[derive(Debug, Serialize)]
pub struct LearningSummary {
    pub confidence_adjustments: BTreeMap<String, f64>,
    pub user_corrections: usize,
    pub successful_commands: usize,
}

/// GET /api/v1/learning: current learned confidence values.
pub async fn learning(State(state): State<AppState>) -> Json<LearningSummary> {
    let snapshot = state.assistant.engine().feedback().snapshot();
    Json(LearningSummary {
        confidence_adjustments: snapshot.confidence_adjustments,
        user_corrections: snapshot.user_corrections.len(),
        successful_commands: snapshot.successful_commands.len(),
    })
}
