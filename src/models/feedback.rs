// src/models/feedback.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Feedback payload as it comes out of the store.
#[derive(Debug, Clone, PartialEq)]
pub enum RawFeedback {
    /// Null, or a blank string.
    Absent,
    /// A string that should hold a JSON array of entries.
    JsonString(String),
    /// An already-decoded list of untyped entries.
    StructuredList(Vec<Value>),
    /// Any other JSON value (object, number, bool). Never valid.
    Other(Value),
}

impl From<&Value> for RawFeedback {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RawFeedback::Absent,
            Value::String(s) if s.trim().is_empty() => RawFeedback::Absent,
            Value::String(s) => RawFeedback::JsonString(s.clone()),
            Value::Array(items) => RawFeedback::StructuredList(items.clone()),
            other => RawFeedback::Other(other.clone()),
        }
    }
}

impl From<Value> for RawFeedback {
    fn from(value: Value) -> Self {
        RawFeedback::from(&value)
    }
}

/// One question's outcome, in the order it was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFeedback {
    pub mark: f64,
    pub max_mark: f64,
    pub reason: String,
    pub question_number: String,
}
