//! Unvalidated question input as it arrives from a caller

use serde::{Deserialize, Serialize};

/// A numeric field that callers may send either as a JSON number or as a
/// numeric string (`1` and `"1"` are both accepted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Int(i64),
    Text(String),
}

impl NumberInput {
    /// The integer value, if the input holds one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumberInput::Int(n) => Some(*n),
            NumberInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for NumberInput {
    fn from(n: i64) -> Self {
        NumberInput::Int(n)
    }
}

/// Raw add-question request; every field is optional so that validation can
/// name the one that is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<NumberInput>,
    pub difficulty: Option<NumberInput>,
}
