// src/text/normalize.rs
//! Single-pass cleanup of raw PDF-extracted text into analyzable prose.
//!
//! PDF extraction tends to mangle resumes: words concatenated across style
//! runs, sentence boundaries lost, section headings glued to body text.
//! This transform re-imposes enough structure for keyword matching and
//! prompting without interpreting the content.

use once_cell::sync::Lazy;
use regex::Regex;

/// Section headings that get forced onto their own paragraph. Matched
/// case-insensitively on word boundaries.
const SECTION_KEYWORDS: &[&str] = &[
    "EXPERIENCE",
    "EDUCATION",
    "SKILLS",
    "SUMMARY",
    "OBJECTIVE",
    "PROJECTS",
    "CERTIFICATIONS",
    "ACHIEVEMENTS",
    "CONTACT",
    "Work Experience",
    "Professional Experience",
    "Employment History",
    "Technical Skills",
    "Core Competencies",
    "Qualifications",
];

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])\s*([A-Z])").unwrap());
static SPLIT_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])\s*\n\s*([a-z])").unwrap());
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s@.,!?():;'"/\\+&%#-]"#).unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

static SECTION_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SECTION_KEYWORDS
        .iter()
        .map(|keyword| {
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))).unwrap();
            (pattern, *keyword)
        })
        .collect()
});

/// Clean and re-structure raw extracted text.
///
/// The output never contains more than two consecutive newlines and is
/// trimmed at both ends. Idempotent for already-clean text.
pub fn clean_and_structure(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut text = raw.replace("\r\n", "\n").replace('\r', "\n");

    // De-mangle concatenated words and lost sentence boundaries.
    text = CAMEL_BOUNDARY.replace_all(&text, "$1 $2").into_owned();
    text = SENTENCE_BREAK.replace_all(&text, "$1\n$2").into_owned();
    text = SPLIT_WORD.replace_all(&text, "$1 $2").into_owned();

    text = SPACE_RUN.replace_all(&text, " ").into_owned();
    text = UNSAFE_CHARS.replace_all(&text, " ").into_owned();

    // Re-impose section boundaries lost during extraction.
    for (pattern, keyword) in SECTION_PATTERNS.iter() {
        text = pattern
            .replace_all(&text, format!("\n\n{}\n", keyword))
            .into_owned();
    }

    text = SPACE_RUN.replace_all(&text, " ").into_owned();
    text = BLANK_RUN.replace_all(&text, "\n\n").into_owned();

    text.trim().to_string()
}
