// src/error.rs
//! Typed failure taxonomy for the analysis and roadmap pipelines.

use thiserror::Error;

/// Every way a pipeline invocation can go wrong.
///
/// `InputInvalid` and `ExtractionFailed` surface to the caller immediately.
/// The three generation-side variants are recovered locally via the
/// deterministic fallback on the analysis path; the roadmap path propagates
/// them as a request failure. Nothing is ever retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    InputInvalid(String),

    #[error("could not extract readable text from PDF: {0}")]
    ExtractionFailed(String),

    #[error("generation service unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("malformed model payload: {0}")]
    MalformedPayload(String),

    #[error("model payload failed schema checks: {0}")]
    SchemaInvalid(String),
}

impl PipelineError {
    /// Whether the analysis path may substitute the deterministic fallback
    /// for this failure instead of surfacing it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PipelineError::GenerationUnavailable(_)
                | PipelineError::MalformedPayload(_)
                | PipelineError::SchemaInvalid(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
