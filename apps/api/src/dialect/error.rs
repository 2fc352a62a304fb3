use thiserror::Error;

use crate::llm_client::LlmError;

/// Typed failures of the classification pipeline.
///
/// `Malformed` and `SchemaViolation` keep the raw reply so it can be logged;
/// it is never coerced into a result.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("completion service failed: {0}")]
    ServiceFailure(#[from] LlmError),

    #[error("completion service returned no usable reply")]
    EmptyResponse,

    #[error("model output is not a single JSON object: {reason}")]
    MalformedOutput { reason: String, raw: String },

    #[error("model output violates the result schema: {reason}")]
    SchemaViolation { reason: String, raw: String },
}
