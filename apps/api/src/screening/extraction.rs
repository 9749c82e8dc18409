//! Extraction: pulls one JSON object out of free-form completion output.
//!
//! The span is first `{` through last `}` inclusive. Prose before and after the object is
//! tolerated; stray braces in that prose are not (the span will simply be wrong and fail
//! to decode).
//!
//! Decoded output is an untyped map. Callers coerce each field with the helpers below.

use serde_json::{Map, Value};
use thiserror::Error;

pub type JsonObject = Map<String, Value>;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("no JSON object boundaries found in model output")]
    NoJsonBoundaries,

    #[error("malformed JSON in model output: {reason} (span: {span})")]
    MalformedJson { span: String, reason: String },
}

/// Locates and decodes the JSON object embedded in `raw`.
pub fn extract_json_object(raw: &str) -> Result<JsonObject, ExtractionError> {
    let start = raw.find('{').ok_or(ExtractionError::NoJsonBoundaries)?;
    let end = raw.rfind('}').ok_or(ExtractionError::NoJsonBoundaries)?;
    if end < start {
        return Err(ExtractionError::NoJsonBoundaries);
    }

    // Braces are single-byte, so both indices sit on char boundaries.
    let span = &raw[start..=end];
    serde_json::from_str::<JsonObject>(span).map_err(|e| ExtractionError::MalformedJson {
        span: span.to_string(),
        reason: e.to_string(),
    })
}

/// Reads a non-negative number, accepting numeric strings. Anything else is 0.
pub fn number_field(object: &JsonObject, key: &str) -> f64 {
    let value = match object.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

/// Reads a list of strings, skipping non-string entries. Missing or non-array is empty.
pub fn string_list_field(object: &JsonObject, key: &str) -> Vec<String> {
    object
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Reads a string field. Missing or non-string is empty.
pub fn string_field(object: &JsonObject, key: &str) -> String {
    object
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
