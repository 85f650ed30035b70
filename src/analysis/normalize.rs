// src/analysis/normalize.rs
//! Coerce-and-default transform from the loosely-typed parsed payload into
//! the canonical `MatchAnalysis`. All leniency toward the model lives here:
//! fields are repaired or defaulted, never rejected, except for the one
//! mandatory presence check on a numeric match score.

use super::types::{rating_for_score, KeywordMatch, MatchAnalysis, SectionScore};
use crate::error::PipelineError;
use serde_json::Value;
use std::collections::BTreeMap;

pub fn normalize_analysis(payload: &Value) -> Result<MatchAnalysis, PipelineError> {
    let match_score = payload
        .get("matchScore")
        .and_then(number)
        .ok_or_else(|| {
            PipelineError::SchemaInvalid("missing or non-numeric matchScore".to_string())
        })?
        .clamp(0, 100);

    let matched = string_array(payload.pointer("/keywordMatch/matched"));
    let total = payload
        .pointer("/keywordMatch/total")
        .and_then(number)
        .unwrap_or(matched.len() as i64)
        .max(0);

    Ok(MatchAnalysis {
        match_score,
        // The rating is always re-derived so it can never contradict the score.
        overall_rating: rating_for_score(match_score).to_string(),
        strengths: string_array(payload.get("strengths")),
        weaknesses: string_array(payload.get("weaknesses")),
        keyword_match: KeywordMatch { matched, total },
        missing_keywords: string_array(payload.get("missingKeywords")),
        recommendations: string_array(payload.get("recommendations")),
        sections: sections(payload.get("sections"), match_score),
    })
}

fn number(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))
}

/// Missing arrays become empty; scalar elements are coerced to their string
/// form; objects and nulls are dropped.
fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn sections(value: Option<&Value>, overall_score: i64) -> BTreeMap<String, SectionScore> {
    let mut out = BTreeMap::new();

    if let Some(Value::Object(map)) = value {
        for (name, entry) in map {
            let score = entry
                .get("score")
                .and_then(number)
                .unwrap_or(overall_score)
                .clamp(0, 100);
            let feedback = entry
                .get("feedback")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            out.insert(name.clone(), SectionScore { score, feedback });
        }
    }

    out
}
