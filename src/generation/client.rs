// src/generation/client.rs
//! HTTP client for the generative text-completion service.
//!
//! One call per pipeline invocation, raced against a wall-clock budget and
//! a caller-held cancellation token. Timeouts, cancellation, transport
//! errors, and non-2xx statuses all classify as `GenerationUnavailable`;
//! the caller decides whether that routes to a fallback or surfaces.

use crate::config::GenerationConfig;
use crate::error::PipelineError;
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

pub struct GenerationClient {
    client: reqwest::Client,
    config: GenerationConfig,
}

impl GenerationClient {
    pub fn new(config: GenerationConfig) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| PipelineError::GenerationUnavailable(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Send one prompt and return the raw reply text.
    ///
    /// First-to-complete semantics between the call, the configured budget,
    /// and `cancel`; the losing branch's result is dropped. The provider-side
    /// request is not cancelled upstream.
    pub async fn generate(
        &self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String, PipelineError> {
        let call = self.send_prompt(prompt);

        tokio::select! {
            result = call => result,
            _ = tokio::time::sleep(self.config.timeout) => {
                warn!(budget_secs = self.config.timeout.as_secs(), "generation call timed out");
                Err(PipelineError::GenerationUnavailable("request timeout".to_string()))
            }
            _ = cancel.cancelled() => {
                info!("generation call cancelled by caller");
                Err(PipelineError::GenerationUnavailable("request cancelled".to_string()))
            }
        }
    }

    async fn send_prompt(&self, prompt: &str) -> Result<String, PipelineError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.1,
                "topK": 1,
                "topP": 0.8,
                "maxOutputTokens": 4096,
            }
        });

        info!(model = %self.config.model, "calling generation service");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PipelineError::GenerationUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "generation service returned error status");
            return Err(PipelineError::GenerationUnavailable(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::GenerationUnavailable(e.to_string()))?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(PipelineError::GenerationUnavailable(
                "service reply contained no text".to_string(),
            ));
        }

        info!(chars = text.len(), "generation reply received");
        Ok(text)
    }
}
