// src/text/mod.rs
//! Deterministic text processing: cleanup of raw extracted text and
//! vocabulary-based keyword overlap between a resume and a job description.

pub mod keywords;
pub mod normalize;

pub use keywords::{extract_keywords, match_keywords, KeywordOverlap};
pub use normalize::clean_and_structure;
