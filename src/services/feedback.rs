// src/services/feedback.rs

use std::fmt;

use serde_json::{Map, Value};

use crate::models::feedback::{QuestionFeedback, RawFeedback};

/// Why a stored payload could not be read. Only ever logged.
#[derive(Debug)]
enum MalformedFeedback {
    Decode(serde_json::Error),
    NotAList(&'static str),
}

impl fmt::Display for MalformedFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedFeedback::Decode(e) => write!(f, "invalid JSON: {e}"),
            MalformedFeedback::NotAList(kind) => write!(f, "expected a list of entries, got {kind}"),
        }
    }
}

/// Parses a stored feedback payload into ordered question results.
///
/// Never fails: an unreadable payload yields an empty list, so one corrupt
/// record cannot break a page.
pub fn normalize(raw: &RawFeedback) -> Vec<QuestionFeedback> {
    match entries(raw) {
        Ok(items) => items.iter().map(coerce_entry).collect(),
        Err(e) => {
            tracing::warn!("Discarding malformed feedback payload: {}", e);
            Vec::new()
        }
    }
}

fn entries(raw: &RawFeedback) -> Result<Vec<Value>, MalformedFeedback> {
    match raw {
        RawFeedback::Absent => Ok(Vec::new()),
        RawFeedback::StructuredList(items) => Ok(items.clone()),
        RawFeedback::JsonString(text) => {
            match serde_json::from_str::<Value>(text).map_err(MalformedFeedback::Decode)? {
                Value::Array(items) => Ok(items),
                other => Err(MalformedFeedback::NotAList(kind_of(&other))),
            }
        }
        RawFeedback::Other(other) => Err(MalformedFeedback::NotAList(kind_of(other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn coerce_entry(entry: &Value) -> QuestionFeedback {
    let empty = Map::new();
    let fields = entry.as_object().unwrap_or(&empty);

    QuestionFeedback {
        mark: coerce_mark(fields.get("mark")),
        max_mark: coerce_mark(fields.get("maxMark")),
        reason: coerce_text(fields.get("reason")),
        question_number: coerce_text(fields.get("questionNumber")),
    }
}

/// Numbers and numeric strings are accepted; anything else, including
/// negative or non-finite values, becomes 0.
fn coerce_mark(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() && n >= 0.0 => n,
        _ => 0.0,
    }
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
