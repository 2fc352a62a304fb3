//! Analyzer — the full classification pipeline behind `POST /api/analyze`.
//!
//! text → prompt builder → classifier invoker → response validator → verdict.
//! Holds only read-only shared state, so one instance serves every request.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::dialect::classifier::{self, ClassifierSettings};
use crate::dialect::error::AnalysisError;
use crate::dialect::prompt_builder::build_system_prompt;
use crate::dialect::validator::validate_reply;
use crate::llm_client::CompletionBackend;
use crate::models::analysis::AnalysisResult;
use crate::models::knowledge::KnowledgeBase;

#[derive(Clone)]
pub struct Analyzer {
    knowledge_base: Arc<KnowledgeBase>,
    backend: Arc<dyn CompletionBackend>,
    settings: ClassifierSettings,
}

impl Analyzer {
    pub fn new(
        knowledge_base: Arc<KnowledgeBase>,
        backend: Arc<dyn CompletionBackend>,
        settings: ClassifierSettings,
    ) -> Self {
        Self {
            knowledge_base,
            backend,
            settings,
        }
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Classifies `text`. Blank input is rejected before any outbound call.
    #[instrument(skip_all, fields(analysis_id = %uuid::Uuid::new_v4(), chars = text.chars().count()))]
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "text cannot be empty".to_string(),
            ));
        }

        let system_prompt = build_system_prompt(&self.knowledge_base, text);
        let raw = classifier::invoke(self.backend.as_ref(), &self.settings, system_prompt).await?;
        let result = validate_reply(&raw)?;

        info!(
            "Analysis complete: is_argentinian={}, confidence={}",
            result.is_argentinian,
            result.confidence.level()
        );
        Ok(result)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::dialect::knowledge_base;
    use crate::llm_client::{ChatRequest, ChatResponse, LlmError};
    use crate::models::analysis::Confidence;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend stub returning a fixed reply and counting calls.
    pub(crate) struct StubBackend {
        reply: Result<String, u16>,
        pub(crate) calls: AtomicUsize,
    }

    impl StubBackend {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for StubBackend {
        async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(ChatResponse::from_text(text.clone())),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "upstream unavailable".to_string(),
                }),
            }
        }
    }

    pub(crate) fn analyzer_with(backend: Arc<StubBackend>) -> Analyzer {
        let kb = knowledge_base::load(None).unwrap();
        Analyzer::new(Arc::new(kb), backend, ClassifierSettings::default())
    }

    #[tokio::test]
    async fn test_end_to_end_success() {
        let backend = Arc::new(StubBackend::replying(
            r#"{"confidence":3,"isArgentinian":true,"details":"Uso de voseo y lunfardo característico"}"#,
        ));
        let analyzer = analyzer_with(backend.clone());

        let result = analyzer
            .analyze("Dale boludo, vamos a tomar unos mates")
            .await
            .unwrap();

        assert_eq!(
            result,
            AnalysisResult {
                confidence: Confidence::High,
                is_argentinian: true,
                details: "Uso de voseo y lunfardo característico".to_string(),
            }
        );
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_input_short_circuits() {
        let backend = Arc::new(StubBackend::replying("{}"));
        let analyzer = analyzer_with(backend.clone());

        for text in ["", "   ", "\n\t"] {
            let err = analyzer.analyze(text).await.unwrap_err();
            assert!(matches!(err, AnalysisError::InvalidInput(_)));
        }
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transport_error_is_service_failure() {
        let analyzer = analyzer_with(Arc::new(StubBackend::failing(503)));
        let err = analyzer.analyze("Che, ¿qué hacés?").await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::ServiceFailure(LlmError::Api { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_schema_violation_propagates() {
        let analyzer = analyzer_with(Arc::new(StubBackend::replying(
            r#"{"confidence": 4, "isArgentinian": true, "details": "x"}"#,
        )));
        let err = analyzer.analyze("Che").await.unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaViolation { .. }));
    }

    #[tokio::test]
    async fn test_prose_reply_is_malformed() {
        let analyzer = analyzer_with(Arc::new(StubBackend::replying(
            r#"Acá está tu análisis: {"confidence":2,"isArgentinian":true,"details":"x"}"#,
        )));
        let err = analyzer.analyze("Che").await.unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedOutput { .. }));
    }

    #[tokio::test]
    async fn test_independent_requests_do_not_share_state() {
        let backend = Arc::new(StubBackend::replying(
            r#"{"confidence":1,"isArgentinian":false,"details":""}"#,
        ));
        let analyzer = analyzer_with(backend.clone());

        let (a, b) = tokio::join!(analyzer.analyze("Hola"), analyzer.analyze("Buenas"));
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }
}
