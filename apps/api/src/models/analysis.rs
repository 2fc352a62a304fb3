use serde::Serialize;

/// Discrete confidence of a verdict. Serialized as its integer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum Confidence {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Confidence {
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl From<Confidence> for u8 {
    fn from(c: Confidence) -> Self {
        c.level()
    }
}

impl TryFrom<u8> for Confidence {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Confidence::Low),
            2 => Ok(Confidence::Medium),
            3 => Ok(Confidence::High),
            other => Err(format!("confidence must be 1, 2 or 3, got {other}")),
        }
    }
}

/// Validated verdict returned to callers. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub confidence: Confidence,
    pub is_argentinian: bool,
    pub details: String,
}
