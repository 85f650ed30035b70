// src/web/types.rs

use crate::analysis::MatchAnalysis;
use rocket::form::FromForm;
use rocket::fs::TempFile;
use serde::{Deserialize, Serialize};

/// Multipart submission for the analyze endpoint. Both fields are optional
/// at the guard level so a missing field reaches the handler and gets the
/// documented 400 error body instead of a guard-level 422.
#[derive(FromForm)]
pub struct AnalyzeUploadForm<'f> {
    pub resume: Option<TempFile<'f>>,
    #[field(name = "jobDescription")]
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub skill: Option<String>,
}

/// Wire shape of a successful analysis. Fallback-backed responses carry the
/// availability warning; AI-backed responses have no `warning` field at all.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: MatchAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{KeywordMatch, RATING_FAIR};
    use std::collections::BTreeMap;

    fn analysis() -> MatchAnalysis {
        MatchAnalysis {
            match_score: 70,
            overall_rating: RATING_FAIR.to_string(),
            strengths: vec![],
            weaknesses: vec![],
            keyword_match: KeywordMatch {
                matched: vec![],
                total: 0,
            },
            missing_keywords: vec![],
            recommendations: vec![],
            sections: BTreeMap::new(),
        }
    }

    #[test]
    fn test_ai_backed_response_has_no_warning_field() {
        let json = serde_json::to_value(AnalyzeResponse {
            analysis: analysis(),
            warning: None,
        })
        .unwrap();
        assert!(json.get("warning").is_none());
        assert_eq!(json["matchScore"], 70);
    }

    #[test]
    fn test_fallback_response_is_schema_identical_plus_warning() {
        let json = serde_json::to_value(AnalyzeResponse {
            analysis: analysis(),
            warning: Some("AI service temporarily unavailable".to_string()),
        })
        .unwrap();
        assert!(json["warning"].as_str().unwrap().contains("unavailable"));
        assert_eq!(json["matchScore"], 70);
    }
}
