// src/roadmap/mod.rs
//! Skill-to-learning-roadmap pipeline.
//!
//! Same contract-enforcing shape as the analysis path but with no
//! deterministic fallback: generation failures propagate to the caller as
//! `Failed to generate roadmap for <skill>: <cause>`.

pub mod normalize;
pub mod prompt;
pub mod types;

pub use normalize::normalize_roadmap;
pub use types::{Edge, Node, Position, RoadmapGraph};

use crate::config::GenerationConfig;
use crate::error::PipelineError;
use crate::generation::{extract_json_payload, GenerationClient};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Reject empty skill names after trimming.
pub fn validate_skill(skill: &str) -> Result<String, PipelineError> {
    let trimmed = skill.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::InputInvalid(
            "Skill name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub struct RoadmapGenerator {
    client: GenerationClient,
}

impl RoadmapGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            client: GenerationClient::new(config)?,
        })
    }

    /// Generate and validate a roadmap for one skill.
    pub async fn generate(
        &self,
        skill: &str,
        cancel: &CancellationToken,
    ) -> Result<RoadmapGraph, PipelineError> {
        let skill = validate_skill(skill)?;
        info!(%skill, "generating learning roadmap");

        // No fallback on this path: failures propagate to the caller.
        match self.generate_inner(&skill, cancel).await {
            Ok(graph) => {
                info!(nodes = graph.nodes.len(), edges = graph.edges.len(), "roadmap generated");
                Ok(graph)
            }
            Err(e) => {
                error!(%skill, error = %e, "roadmap generation failed");
                Err(e)
            }
        }
    }

    async fn generate_inner(
        &self,
        skill: &str,
        cancel: &CancellationToken,
    ) -> Result<RoadmapGraph, PipelineError> {
        let prompt = prompt::build_roadmap_prompt(skill);
        let reply = self.client.generate(&prompt, cancel).await?;
        let payload = extract_json_payload(&reply)?;
        normalize_roadmap(&payload, skill)
    }
}
