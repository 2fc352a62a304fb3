// Argentinian Spanish dialect classification.
// Knowledge base → few-shot prompt → one completion call → strict validation.
// All completion calls go through llm_client; nothing here talks HTTP directly.

pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod handlers;
pub mod knowledge_base;
pub mod prompt_builder;
pub mod prompts;
pub mod validator;
