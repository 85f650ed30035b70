// src/config.rs
//! Process configuration, loaded once in `main` and passed in explicitly.
//!
//! The generation invoker never reads credentials or budgets from ambient
//! environment at call sites; everything it needs travels in
//! `GenerationConfig` so the pipeline stays testable without process state.

use anyhow::{Context, Result};
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the external text-completion service.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Wall-clock budget for one generation call. The call and a timer are
    /// raced; on timeout the call is treated as failed.
    pub timeout: Duration,
}

impl GenerationConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Everything the server needs at boot.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub generation: GenerationConfig,
    pub port: u16,
}

impl ConfigManager {
    /// Load configuration from the environment. Called once, in `main`.
    pub fn load() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY environment variable not set")?;

        let mut generation = GenerationConfig::new(api_key);

        if let Ok(base_url) = std::env::var("GEMINI_API_URL") {
            generation = generation.with_base_url(base_url);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            generation = generation.with_model(model);
        }

        let port = std::env::var("ROCKET_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("ROCKET_PORT must be a valid port number")?;

        Ok(Self { generation, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_defaults() {
        let config = GenerationConfig::new("test-key".to_string());
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.base_url.starts_with("https://"));
    }

    #[test]
    fn test_generation_config_builders() {
        let config = GenerationConfig::new("k".to_string())
            .with_base_url("http://127.0.0.1:9999".to_string())
            .with_model("test-model".to_string())
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
