// src/analysis/mod.rs
//! Resume-to-job-description match analysis pipeline.
//!
//! extract → normalize → {prompt, keyword overlap} → generate → sanitize →
//! schema-normalize, with the deterministic fallback consuming the same
//! normalized inputs whenever the AI branch fails.

pub mod fallback;
pub mod normalize;
pub mod prompt;
pub mod types;

pub use fallback::fallback_analysis;
pub use normalize::normalize_analysis;
pub use types::{KeywordMatch, MatchAnalysis, SectionScore};

use crate::config::GenerationConfig;
use crate::error::PipelineError;
use crate::extract;
use crate::generation::{extract_json_payload, GenerationClient};
use crate::text::{clean_and_structure, match_keywords};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 10;
/// Extracted text below this length fails the request before generation.
pub const MIN_RESUME_TEXT_CHARS: usize = 100;

pub const FALLBACK_WARNING: &str = "AI service temporarily unavailable. \
     Enhanced analysis provided based on keyword matching.";

/// A schema-valid analysis plus a warning when it came from the fallback.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis: MatchAnalysis,
    pub warning: Option<String>,
}

/// Reject job descriptions shorter than 10 characters after trimming.
pub fn validate_job_description(job_description: &str) -> Result<String, PipelineError> {
    let trimmed = job_description.trim();
    if trimmed.len() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(PipelineError::InputInvalid(format!(
            "Job description must be at least {} characters long",
            MIN_JOB_DESCRIPTION_CHARS
        )));
    }
    Ok(trimmed.to_string())
}

pub struct Analyzer {
    client: GenerationClient,
}

impl Analyzer {
    pub fn new(config: GenerationConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            client: GenerationClient::new(config)?,
        })
    }

    /// Run the full analysis pipeline for one request.
    ///
    /// Generation-side failures never surface: the fallback substitutes a
    /// schema-valid result annotated with a warning. Input and extraction
    /// failures do surface.
    pub async fn analyze(
        &self,
        pdf_bytes: &[u8],
        job_description: &str,
        cancel: &CancellationToken,
    ) -> Result<AnalysisOutcome, PipelineError> {
        if pdf_bytes.len() > MAX_PDF_BYTES {
            return Err(PipelineError::InputInvalid(
                "File size must be less than 10MB".to_string(),
            ));
        }
        let job_description = validate_job_description(job_description)?;

        let raw = extract::extract_text(pdf_bytes)?;
        let resume_text = clean_and_structure(&raw);

        if resume_text.len() < MIN_RESUME_TEXT_CHARS {
            return Err(PipelineError::ExtractionFailed(format!(
                "extracted only {} characters of text; the PDF may be image-based or scanned",
                resume_text.len()
            )));
        }
        info!(chars = resume_text.len(), "resume text extracted");

        let overlap = match_keywords(&resume_text, &job_description);

        match self
            .ai_analysis(&resume_text, &job_description, cancel)
            .await
        {
            Ok(analysis) => {
                info!(score = analysis.match_score, "AI analysis completed");
                Ok(AnalysisOutcome {
                    analysis,
                    warning: None,
                })
            }
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "AI analysis failed, using deterministic fallback");
                Ok(AnalysisOutcome {
                    analysis: fallback_analysis(&resume_text, &overlap),
                    warning: Some(FALLBACK_WARNING.to_string()),
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn ai_analysis(
        &self,
        resume_text: &str,
        job_description: &str,
        cancel: &CancellationToken,
    ) -> Result<MatchAnalysis, PipelineError> {
        let prompt = prompt::build_analysis_prompt(job_description, resume_text);
        let reply = self.client.generate(&prompt, cancel).await?;
        let payload = extract_json_payload(&reply)?;
        normalize_analysis(&payload)
    }
}
