// src/analysis/types.rs
//! Canonical match-analysis output shape. Both the AI path and the
//! deterministic fallback must produce exactly this structure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const RATING_GOOD: &str = "Good Match";
pub const RATING_FAIR: &str = "Fair Match";
pub const RATING_POOR: &str = "Poor Match";

/// Rating bucket for a 0-100 match score.
pub fn rating_for_score(score: i64) -> &'static str {
    if score >= 80 {
        RATING_GOOD
    } else if score >= 60 {
        RATING_FAIR
    } else {
        RATING_POOR
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub match_score: i64,
    pub overall_rating: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    pub keyword_match: KeywordMatch,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub sections: BTreeMap<String, SectionScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    #[serde(default)]
    pub matched: Vec<String>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub score: i64,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rating_for_score(100), RATING_GOOD);
        assert_eq!(rating_for_score(80), RATING_GOOD);
        assert_eq!(rating_for_score(79), RATING_FAIR);
        assert_eq!(rating_for_score(60), RATING_FAIR);
        assert_eq!(rating_for_score(59), RATING_POOR);
        assert_eq!(rating_for_score(0), RATING_POOR);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let analysis = MatchAnalysis {
            match_score: 70,
            overall_rating: RATING_FAIR.to_string(),
            strengths: vec![],
            weaknesses: vec![],
            keyword_match: KeywordMatch {
                matched: vec!["python".to_string()],
                total: 1,
            },
            missing_keywords: vec![],
            recommendations: vec![],
            sections: BTreeMap::new(),
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["matchScore"], 70);
        assert_eq!(json["keywordMatch"]["total"], 1);
        assert!(json["missingKeywords"].is_array());
    }
}
