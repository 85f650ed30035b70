// src/generation/sanitize.rs
//! Locate and parse the structured payload embedded in a model reply.
//!
//! Models emit code fences and commentary despite instructions, so this is
//! a boundary scan rather than a lexer: strip fence markers, then keep only
//! the span between the first `{` and the last `}`.

use crate::error::PipelineError;
use once_cell::sync::Lazy;
use regex::Regex;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```(?:json)?").unwrap());

/// Strip formatting artifacts and parse the embedded JSON object.
pub fn extract_json_payload(reply: &str) -> Result<serde_json::Value, PipelineError> {
    let cleaned = CODE_FENCE.replace_all(reply, "");
    let cleaned = cleaned.trim();

    let start = cleaned.find('{');
    let end = cleaned.rfind('}');

    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if s < e => (s, e),
        _ => {
            return Err(PipelineError::MalformedPayload(
                "no JSON object found in reply".to_string(),
            ))
        }
    };

    serde_json::from_str(&cleaned[start..=end])
        .map_err(|e| PipelineError::MalformedPayload(e.to_string()))
}
