//! Knowledge Base loader — reads the curated dialect dataset and validates it up front.
//!
//! The whole dataset is checked at startup so the prompt builder can assume
//! non-empty examples and feature lists without re-checking them per request.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::knowledge::{CommonFeatures, DialectExample, KnowledgeBase};

/// Dataset compiled into the binary. Used unless `KNOWLEDGE_BASE_PATH` is set.
pub const BUNDLED_DATASET: &str = include_str!("../../assets/lunfardo-argentino.json");

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("cannot read knowledge base file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("knowledge base is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("knowledge base failed validation: {0}")]
    Invalid(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Source layout (mirrors the JSON dataset file)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetFile {
    examples: Vec<ExampleRecord>,
    common_features: CommonFeaturesRecord,
}

#[derive(Debug, Deserialize)]
struct ExampleRecord {
    text: String,
    features: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CommonFeaturesRecord {
    pronouns: Vec<String>,
    verbs: VerbsRecord,
    slang: SlangRecord,
    expressions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VerbsRecord {
    voseo: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SlangRecord {
    nouns: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Loading
// ────────────────────────────────────────────────────────────────────────────

/// Loads the knowledge base from `path` when given, otherwise from the bundled dataset.
pub fn load(path: Option<&Path>) -> Result<KnowledgeBase, KnowledgeBaseError> {
    let kb = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let kb = parse(&raw)?;
            info!(
                "Knowledge base loaded from {} ({} examples)",
                path.display(),
                kb.examples.len()
            );
            kb
        }
        None => {
            let kb = parse(BUNDLED_DATASET)?;
            info!("Bundled knowledge base loaded ({} examples)", kb.examples.len());
            kb
        }
    };
    Ok(kb)
}

/// Parses and validates a dataset document.
pub fn parse(raw: &str) -> Result<KnowledgeBase, KnowledgeBaseError> {
    let file: DatasetFile = serde_json::from_str(raw)?;
    validate(file)
}

fn validate(file: DatasetFile) -> Result<KnowledgeBase, KnowledgeBaseError> {
    if file.examples.is_empty() {
        return Err(KnowledgeBaseError::Invalid(
            "examples list is empty".to_string(),
        ));
    }

    let mut examples = Vec::with_capacity(file.examples.len());
    for (i, record) in file.examples.into_iter().enumerate() {
        if record.text.trim().is_empty() {
            return Err(KnowledgeBaseError::Invalid(format!(
                "example #{i} has empty text"
            )));
        }
        if record.features.is_empty() {
            return Err(KnowledgeBaseError::Invalid(format!(
                "example #{i} has no features"
            )));
        }
        examples.push(DialectExample {
            text: record.text,
            features: record.features,
        });
    }

    let common = file.common_features;
    Ok(KnowledgeBase {
        examples,
        common_features: CommonFeatures {
            pronouns: common.pronouns,
            verbs_voseo: common.verbs.voseo,
            slang_nouns: common.slang.nouns,
            expressions: common.expressions,
        },
    })
}
