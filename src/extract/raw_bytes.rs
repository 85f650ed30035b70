// src/extract/raw_bytes.rs
//! Last-resort extraction for severely malformed or scanned documents:
//! scan the undecoded byte stream for bracket-delimited and
//! operator-delimited text tokens using pattern heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

// Parenthesized literal strings, BT..ET text blocks, and long plain runs.
static PAREN_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]{2,})\)").unwrap());
static TEXT_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)BT\s+(.*?)\s+ET").unwrap());
static PLAIN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9\s.,!?@-]{10,}").unwrap());

static OPERATOR_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(BT|ET|Tj|TJ|Td|Tm)\b").unwrap());
static NON_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.,!?@-]").unwrap());

pub fn extract(bytes: &[u8]) -> anyhow::Result<String> {
    // Lossy latin-1 style view; the heuristics only keep text-like spans.
    let haystack: String = bytes.iter().map(|&b| b as char).collect();

    let mut recovered = String::new();

    let candidates = PAREN_TOKEN
        .captures_iter(&haystack)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .chain(
            TEXT_BLOCK
                .captures_iter(&haystack)
                .filter_map(|c| c.get(1))
                .map(|m| m.as_str().to_string()),
        )
        .chain(PLAIN_RUN.find_iter(&haystack).map(|m| m.as_str().to_string()));

    for candidate in candidates {
        let cleaned = clean_token(&candidate);
        if cleaned.len() > 3 {
            recovered.push_str(&cleaned);
            recovered.push(' ');
        }
    }

    Ok(recovered.trim().to_string())
}

fn clean_token(token: &str) -> String {
    let stripped = OPERATOR_NOISE.replace_all(token, " ");
    let stripped = NON_TEXT.replace_all(&stripped, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
