//! Axum route handlers for the dialect analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

/// POST /api/analyze
///
/// Body: `{ "text": "..." }`. Shape errors are rejected here so the
/// pipeline only ever sees a string.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let text = match body.get("text") {
        Some(Value::String(text)) => text,
        Some(_) => return Err(AppError::Validation("text must be a string".to_string())),
        None => return Err(AppError::Validation("text is required".to_string())),
    };

    if text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let result = state.analyzer.analyze(text).await?;
    Ok(Json(result))
}

/// Any non-POST method on /api/analyze.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
