use crate::dialect::analyzer::Analyzer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Knowledge base, completion backend and classifier settings, bundled.
    pub analyzer: Analyzer,
}
