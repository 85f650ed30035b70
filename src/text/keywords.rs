// src/text/keywords.rs
//! Curated-vocabulary keyword extraction and recall-biased overlap matching.
//!
//! Matching between job and resume keywords is symmetric substring
//! containment rather than exact equality, so "leadership" still matches
//! "team leadership" and plural/inflected forms do not produce false
//! negatives. Over-matching is deliberate.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

const TECHNICAL_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "mongodb",
    "mysql",
    "postgresql",
    "redis",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "git",
    "jenkins",
    "ci/cd",
    "agile",
    "scrum",
    "rest",
    "api",
    "microservices",
    "leadership",
    "management",
    "communication",
    "problem solving",
    "analytical",
    "teamwork",
    "project management",
    "strategic planning",
    "data analysis",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem-solving",
    "analytical",
    "creative",
    "detail-oriented",
    "self-motivated",
    "adaptable",
    "organized",
];

const INDUSTRY_TERMS: &[&str] = &[
    "saas",
    "e-commerce",
    "fintech",
    "healthcare",
    "education",
    "retail",
    "manufacturing",
    "consulting",
    "startup",
    "enterprise",
];

const MAX_MISSING_KEYWORDS: usize = 8;

static PHRASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z][a-z0-9.\s-]{2,20}\b").unwrap());

fn vocabulary() -> impl Iterator<Item = &'static str> {
    TECHNICAL_KEYWORDS
        .iter()
        .chain(SOFT_SKILLS.iter())
        .chain(INDUSTRY_TERMS.iter())
        .copied()
}

/// Extract candidate keywords from one text: curated vocabulary hits plus
/// short multi-word phrases (5-50 chars) containing a vocabulary term.
pub fn extract_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lower = text.to_lowercase();
    // BTreeSet keeps extraction order stable across runs.
    let mut found = BTreeSet::new();

    for keyword in vocabulary() {
        if lower.contains(keyword) {
            found.insert(keyword.to_string());
        }
    }

    for phrase in PHRASE.find_iter(&lower) {
        let phrase = phrase.as_str().trim();
        if phrase.len() > 5
            && phrase.len() < 50
            && vocabulary().any(|keyword| phrase.contains(keyword))
        {
            found.insert(phrase.to_string());
        }
    }

    found.into_iter().collect()
}

/// Result of matching job-description keywords against resume keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordOverlap {
    /// Job keywords with a resume-side containment match.
    pub matched: Vec<String>,
    /// Job keywords with no resume match, capped at 8.
    pub missing: Vec<String>,
    /// Total number of keywords extracted from the job description.
    pub job_total: usize,
}

/// Compute the keyword overlap between a resume and a job description.
pub fn match_keywords(resume_text: &str, job_text: &str) -> KeywordOverlap {
    let job_keywords = extract_keywords(job_text);
    let resume_keywords = extract_keywords(resume_text);

    let matched: Vec<String> = job_keywords
        .iter()
        .filter(|job_kw| {
            resume_keywords
                .iter()
                .any(|resume_kw| resume_kw.contains(job_kw.as_str()) || job_kw.contains(resume_kw))
        })
        .cloned()
        .collect();

    let missing: Vec<String> = job_keywords
        .iter()
        .filter(|kw| !matched.contains(kw))
        .take(MAX_MISSING_KEYWORDS)
        .cloned()
        .collect();

    KeywordOverlap {
        matched,
        missing,
        job_total: job_keywords.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_vocabulary_terms() {
        let keywords = extract_keywords("Built services in Python, deployed with Docker");
        assert!(keywords.contains(&"python".to_string()));
        assert!(keywords.contains(&"docker".to_string()));
    }

    #[test]
    fn test_extraction_is_case_insensitive() {
        let keywords = extract_keywords("PYTHON and Leadership");
        assert!(keywords.contains(&"python".to_string()));
        assert!(keywords.contains(&"leadership".to_string()));
    }

    #[test]
    fn test_empty_text_yields_no_keywords() {
        assert!(extract_keywords("").is_empty());
    }

    // Scenario from the product requirements: shared python/leadership,
    // kubernetes and communication only on the job side.
    #[test]
    fn test_overlap_scenario() {
        let resume = "Python, Docker, Leadership";
        let job = "Python, Kubernetes, Leadership, Communication";

        let overlap = match_keywords(resume, job);

        assert!(overlap.matched.contains(&"python".to_string()));
        assert!(overlap.matched.contains(&"leadership".to_string()));
        assert!(overlap.missing.contains(&"kubernetes".to_string()));
        assert!(overlap.missing.contains(&"communication".to_string()));
        assert!(!overlap.matched.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_containment_matches_inflected_forms() {
        let overlap = match_keywords("team leadership across projects", "leadership");
        assert!(overlap.matched.contains(&"leadership".to_string()));
    }

    #[test]
    fn test_missing_capped_at_eight() {
        let job = "python java react angular vue docker kubernetes aws azure \
                   redis mongodb postgresql jenkins scrum fintech saas";
        let overlap = match_keywords("unrelated resume text about gardening", job);
        assert!(overlap.missing.len() <= 8);
        assert!(overlap.job_total > 8);
    }

    #[test]
    fn test_job_total_counts_all_job_keywords() {
        let overlap = match_keywords("", "python and docker");
        assert_eq!(overlap.matched.len(), 0);
        assert!(overlap.job_total >= 2);
    }
}
