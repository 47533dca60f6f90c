//! Transcription response normalization
//!
//! The speech endpoint does not commit to a single response schema. The
//! body may be a JSON object with a `text` field, a JSON-encoded string
//! wrapping such an object, a `text=`-prefixed string, or arbitrary text.
//! Decoders are attempted in that priority order; the first that applies
//! wins and the rest are never consulted.

use serde_json::Value;

/// Decoded shape of a transcription response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape {
    /// JSON object exposing a `text` field
    TextField(String),
    /// JSON-encoded string that itself holds a `text` object
    NestedJson(String),
    /// String carrying a literal `text=` prefix
    Prefixed(String),
    /// Anything else, taken verbatim
    Raw(String),
}

impl ResponseShape {
    /// Decode a response body, trying each shape in priority order.
    pub fn decode(body: &str) -> Self {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            match value {
                Value::Object(map) => {
                    if let Some(text) = map.get("text") {
                        return Self::TextField(json_text(text));
                    }
                }
                Value::String(inner) => {
                    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&inner) {
                        if let Some(text) = map.get("text") {
                            return Self::NestedJson(json_text(text));
                        }
                    }
                    if let Some(rest) = inner.strip_prefix("text=") {
                        return Self::Prefixed(rest.to_string());
                    }
                    return Self::Raw(inner);
                }
                _ => {}
            }
        }
        if let Some(rest) = body.strip_prefix("text=") {
            return Self::Prefixed(rest.to_string());
        }
        Self::Raw(body.to_string())
    }

    fn into_inner(self) -> String {
        match self {
            Self::TextField(text)
            | Self::NestedJson(text)
            | Self::Prefixed(text)
            | Self::Raw(text) => text,
        }
    }
}

/// Extract the final transcript text from a response body.
///
/// Surrounding whitespace and wrapping quote characters are stripped. A
/// result equal to the literal word "text" (any case) is treated as an
/// empty transcription; this mirrors the endpoint's placeholder output and
/// is reported as success with empty text, not as a failure.
pub fn extract_text(body: &str) -> String {
    let raw = ResponseShape::decode(body).into_inner();
    let stripped = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();

    if stripped.eq_ignore_ascii_case("text") {
        return String::new();
    }
    stripped.to_string()
}

fn json_text(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}
