// src/extract/mod.rs
//! PDF text extraction as an ordered strategy chain.
//!
//! Three strategies are attempted in fixed order; each failure (parser
//! error or below-threshold output) is non-fatal and advances to the next.
//! Exhausting the chain is a terminal `ExtractionFailed`.

pub mod positional;
pub mod raw_bytes;

use crate::error::PipelineError;
use tracing::{debug, info, warn};

/// One extraction algorithm with its success predicate.
pub struct Strategy {
    pub name: &'static str,
    /// Minimum trimmed output length for the strategy to count as a success.
    pub min_len: usize,
    pub run: fn(&[u8]) -> anyhow::Result<String>,
}

/// Run strategies in order; the first whose output clears its own length
/// threshold wins.
pub fn run_chain(strategies: &[Strategy], bytes: &[u8]) -> Result<String, PipelineError> {
    for strategy in strategies {
        match (strategy.run)(bytes) {
            Ok(text) if text.trim().len() > strategy.min_len => {
                info!(
                    strategy = strategy.name,
                    chars = text.len(),
                    "extraction strategy succeeded"
                );
                return Ok(text);
            }
            Ok(text) => {
                debug!(
                    strategy = strategy.name,
                    chars = text.trim().len(),
                    "extraction strategy returned insufficient text"
                );
            }
            Err(e) => {
                warn!(strategy = strategy.name, error = %e, "extraction strategy failed");
            }
        }
    }

    Err(PipelineError::ExtractionFailed(
        "no extraction strategy produced readable text; the PDF may be \
         image-based, password-protected, or corrupted"
            .to_string(),
    ))
}

fn structured(bytes: &[u8]) -> anyhow::Result<String> {
    Ok(pdf_extract::extract_text_from_mem(bytes)?)
}

/// Extract plain text from raw PDF bytes.
pub fn extract_text(bytes: &[u8]) -> Result<String, PipelineError> {
    const STRATEGIES: &[Strategy] = &[
        Strategy {
            name: "structured",
            min_len: 50,
            run: structured,
        },
        Strategy {
            name: "positional",
            min_len: 100,
            run: positional::extract,
        },
        Strategy {
            name: "raw-bytes",
            min_len: 100,
            run: raw_bytes::extract,
        },
    ];

    run_chain(STRATEGIES, bytes)
}
