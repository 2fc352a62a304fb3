use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::dialect::error::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details: Option<String> = None;

        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Only POST is supported on this endpoint".to_string(),
            ),
            AppError::Analysis(AnalysisError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Analysis(AnalysisError::ServiceFailure(e)) => {
                tracing::error!("Completion service failure: {e}");
                details = Some(e.to_string());
                (
                    StatusCode::BAD_GATEWAY,
                    "SERVICE_FAILURE",
                    "The classification service could not be reached".to_string(),
                )
            }
            AppError::Analysis(AnalysisError::EmptyResponse) => {
                tracing::error!("Completion service returned an empty reply");
                (
                    StatusCode::BAD_GATEWAY,
                    "EMPTY_RESPONSE",
                    "The classification service returned no reply".to_string(),
                )
            }
            AppError::Analysis(AnalysisError::MalformedOutput { reason, .. }) => {
                tracing::error!("Malformed model output: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_OUTPUT",
                    "The classification service replied in an unexpected format".to_string(),
                )
            }
            AppError::Analysis(AnalysisError::SchemaViolation { reason, .. }) => {
                tracing::error!("Model output schema violation: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_VIOLATION",
                    format!("The classification reply was rejected: {reason}"),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = json!(details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_status_codes_per_kind() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (
                AnalysisError::InvalidInput("x".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AnalysisError::ServiceFailure(LlmError::Timeout { secs: 1 }).into(),
                StatusCode::BAD_GATEWAY,
            ),
            (AnalysisError::EmptyResponse.into(), StatusCode::BAD_GATEWAY),
            (
                AnalysisError::MalformedOutput {
                    reason: "x".into(),
                    raw: "x".into(),
                }
                .into(),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
