use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

static LEADING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*```(?i:json)?").expect("LEADING_FENCE is a valid regex pattern")
});

static TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```\s*$").expect("TRAILING_FENCE is a valid regex pattern")
});

/// Removes a wrapping markdown code fence and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> &str {
    let start = LEADING_FENCE.find(raw).map_or(0, |m| m.end());
    let body = &raw[start..];
    let end = TRAILING_FENCE.find(body).map_or(body.len(), |m| m.start());
    body[..end].trim()
}

/// Turns model output into questions. Only JSON syntax and the top-level
/// array are checked; elements are read leniently.
pub fn parse_questions(raw: Option<&str>) -> AppResult<Vec<Question>> {
    let raw = raw.unwrap_or_default();
    let parse_error = || AppError::ParseError {
        raw: raw.to_string(),
    };

    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        log::warn!("Model returned no parseable text");
        return Err(parse_error());
    }

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        log::warn!("Failed to parse model response ({}): {}", e, raw);
        parse_error()
    })?;

    match value {
        Value::Array(items) => Ok(items.iter().map(Question::from_loose_json).collect()),
        other => {
            log::warn!("Model response is not a JSON array: {}", other);
            Err(parse_error())
        }
    }
}
