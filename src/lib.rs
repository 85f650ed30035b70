pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod generation;
pub mod roadmap;
pub mod text;
pub mod web;

pub use analysis::{AnalysisOutcome, Analyzer, MatchAnalysis};
pub use config::{ConfigManager, GenerationConfig};
pub use error::{PipelineError, Result};
pub use roadmap::{RoadmapGenerator, RoadmapGraph};
pub use web::start_web_server;
