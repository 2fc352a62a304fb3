//! Classifier Invoker — one bounded call to the completion backend per request.

use std::time::Duration;

use tracing::debug;

use crate::dialect::error::AnalysisError;
use crate::dialect::prompts::OUTPUT_SCHEMA_INSTRUCTION;
use crate::llm_client::{ChatMessage, ChatRequest, CompletionBackend, LlmError, DEFAULT_MODEL};

/// Model selection and sampling for classification calls. Comes from config,
/// never from the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierSettings {
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Builds the two-message request: the few-shot system prompt and the fixed
/// output-schema instruction.
pub fn build_request(settings: &ClassifierSettings, system_prompt: String) -> ChatRequest {
    ChatRequest {
        model: settings.model.clone(),
        messages: vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(OUTPUT_SCHEMA_INSTRUCTION),
        ],
        temperature: settings.temperature,
    }
}

/// Sends the prompt and returns the raw reply text.
///
/// Transport errors and timeouts become `ServiceFailure`; a successful call
/// without usable content becomes `EmptyResponse`.
pub async fn invoke(
    backend: &dyn CompletionBackend,
    settings: &ClassifierSettings,
    system_prompt: String,
) -> Result<String, AnalysisError> {
    let request = build_request(settings, system_prompt);
    debug!(
        "Invoking classifier: model={}, prompt_chars={}",
        request.model,
        request.messages[0].content.chars().count()
    );

    let response = tokio::time::timeout(settings.timeout, backend.complete(&request))
        .await
        .map_err(|_| LlmError::Timeout {
            secs: settings.timeout.as_secs(),
        })??;

    match response.text() {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(AnalysisError::EmptyResponse),
    }
}
