use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::dialect::classifier::ClassifierSettings;
use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub request_timeout: Duration,
    /// Dataset file overriding the bundled knowledge base.
    pub knowledge_base_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let temperature = optional_env("OPENAI_TEMPERATURE")
            .map(|v| v.parse::<f32>())
            .transpose()
            .context("OPENAI_TEMPERATURE must be a number")?
            .unwrap_or(0.7);
        if !(0.0..=2.0).contains(&temperature) {
            bail!("OPENAI_TEMPERATURE must be between 0.0 and 2.0, got {temperature}");
        }

        let timeout_secs = optional_env("OPENAI_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("OPENAI_TIMEOUT_SECS must be a whole number of seconds")?
            .unwrap_or(60);
        if timeout_secs == 0 {
            bail!("OPENAI_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: optional_env("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            request_timeout: Duration::from_secs(timeout_secs),
            knowledge_base_path: optional_env("KNOWLEDGE_BASE_PATH").map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn classifier_settings(&self) -> ClassifierSettings {
        ClassifierSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: self.request_timeout,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
