// src/analysis/fallback.rs
//! Deterministic, network-free analysis used whenever the AI path fails.
//! Scores are computed from the measured keyword overlap and simple resume
//! signals, so the caller always receives a schema-valid `MatchAnalysis`.

use super::types::{rating_for_score, KeywordMatch, MatchAnalysis, SectionScore};
use crate::text::KeywordOverlap;
use std::collections::BTreeMap;

const MIN_SCORE: i64 = 25;
const MAX_SCORE: i64 = 95;

pub fn fallback_analysis(resume_text: &str, overlap: &KeywordOverlap) -> MatchAnalysis {
    let mut score: i64 = 50;

    if overlap.job_total > 0 {
        let ratio = overlap.matched.len() as f64 / overlap.job_total as f64;
        score = 30 + (ratio * 50.0).round() as i64;
    }

    let lower = resume_text.to_lowercase();
    if resume_text.len() > 1000 {
        score += 5;
    }
    for marker in ["experience", "education", "skills"] {
        if lower.contains(marker) {
            score += 5;
        }
    }

    let score = score.clamp(MIN_SCORE, MAX_SCORE);

    let mut sections = BTreeMap::new();
    sections.insert(
        "experience".to_string(),
        SectionScore {
            score: (score - 5).max(40),
            feedback: "Experience section detected but could be more aligned with job requirements"
                .to_string(),
        },
    );
    sections.insert(
        "skills".to_string(),
        SectionScore {
            score: (score - 10).max(35),
            feedback: "Skills section needs enhancement with job-specific keywords".to_string(),
        },
    );
    sections.insert(
        "education".to_string(),
        SectionScore {
            score: (score + 10).min(90),
            feedback: "Education information appears to be present and relevant".to_string(),
        },
    );
    sections.insert(
        "summary".to_string(),
        SectionScore {
            score: (score - 15).max(30),
            feedback: "Professional summary should be more targeted to the specific job opportunity"
                .to_string(),
        },
    );

    MatchAnalysis {
        match_score: score,
        overall_rating: rating_for_score(score).to_string(),
        strengths: vec![
            format!("Found {} relevant keyword matches", overlap.matched.len()),
            "Resume contains structured professional information".to_string(),
            "Appropriate document format for ATS processing".to_string(),
            "Contains sections for experience and qualifications".to_string(),
        ],
        weaknesses: vec![
            "Could benefit from more targeted keywords from job description".to_string(),
            "Consider adding more specific technical skills".to_string(),
            "Professional summary could be more job-focused".to_string(),
            "Some key requirements from job description are not clearly addressed".to_string(),
        ],
        keyword_match: KeywordMatch {
            matched: overlap.matched.iter().take(10).cloned().collect(),
            total: overlap.matched.len() as i64,
        },
        missing_keywords: overlap.missing.clone(),
        recommendations: vec![
            "Incorporate more keywords from the job description naturally".to_string(),
            "Add specific examples of achievements with measurable results".to_string(),
            "Ensure all required skills from job posting are mentioned".to_string(),
            "Customize your professional summary for this specific role".to_string(),
            "Use action verbs to describe your accomplishments".to_string(),
            "Consider adding a dedicated technical skills section".to_string(),
        ],
        sections,
    }
}
