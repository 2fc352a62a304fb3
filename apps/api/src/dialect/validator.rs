//! Response Validator — strict parse of the model reply into an `AnalysisResult`.
//!
//! The reply must be exactly one JSON object with `confidence`,
//! `isArgentinian` and optionally `details`. Nothing is stripped, extracted
//! or clamped.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::dialect::error::AnalysisError;
use crate::models::analysis::{AnalysisResult, Confidence};

/// Wire shape of the reply. serde rejects unknown and repeated fields;
/// value types and ranges are checked in `check_schema`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawReply {
    #[serde(default, deserialize_with = "present")]
    confidence: Option<Value>,
    #[serde(rename = "isArgentinian", default, deserialize_with = "present")]
    is_argentinian: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    details: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it is not mistaken for an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

pub fn validate_reply(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        warn!("Rejected model output (malformed): {e}; raw reply: {raw}");
        AnalysisError::MalformedOutput {
            reason: e.to_string(),
            raw: raw.to_string(),
        }
    })?;

    if !value.is_object() {
        warn!("Rejected model output (not an object); raw reply: {raw}");
        return Err(AnalysisError::MalformedOutput {
            reason: "expected a JSON object".to_string(),
            raw: raw.to_string(),
        });
    }

    // Re-read the raw text: the parsed map has already collapsed repeated keys.
    serde_json::from_str::<RawReply>(raw)
        .map_err(|e| e.to_string())
        .and_then(check_schema)
        .map_err(|reason| {
            warn!("Rejected model output (schema): {reason}; raw reply: {raw}");
            AnalysisError::SchemaViolation {
                reason,
                raw: raw.to_string(),
            }
        })
}

fn check_schema(reply: RawReply) -> Result<AnalysisResult, String> {
    let confidence = match reply.confidence {
        None => return Err("missing field 'confidence'".to_string()),
        Some(v) => {
            let n = v
                .as_i64()
                .map(i128::from)
                .or_else(|| v.as_u64().map(i128::from))
                .ok_or_else(|| format!("'confidence' must be an integer, got {v}"))?;
            u8::try_from(n)
                .ok()
                .and_then(|n| Confidence::try_from(n).ok())
                .ok_or_else(|| format!("'confidence' must be 1, 2 or 3, got {n}"))?
        }
    };

    let is_argentinian = match reply.is_argentinian {
        None => return Err("missing field 'isArgentinian'".to_string()),
        Some(v) => v
            .as_bool()
            .ok_or_else(|| format!("'isArgentinian' must be a boolean, got {v}"))?,
    };

    let details = match reply.details {
        None => String::new(),
        Some(Value::String(s)) => s,
        Some(v) => return Err(format!("'details' must be a string, got {v}")),
    };

    Ok(AnalysisResult {
        confidence,
        is_argentinian,
        details,
    })
}
