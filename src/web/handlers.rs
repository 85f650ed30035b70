// src/web/handlers.rs
//! Endpoint handlers: multipart intake for analysis, JSON intake for
//! roadmaps, and the mapping from pipeline errors to wire errors.

use crate::analysis::{Analyzer, MAX_PDF_BYTES};
use crate::error::PipelineError;
use crate::roadmap::{RoadmapGenerator, RoadmapGraph};
use crate::web::types::{AnalyzeResponse, AnalyzeUploadForm, ErrorBody, RoadmapRequest};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub type ApiError = Custom<Json<ErrorBody>>;

fn bad_request(message: impl Into<String>) -> ApiError {
    Custom(Status::BadRequest, Json(ErrorBody::new(message)))
}

fn internal_error(message: impl Into<String>) -> ApiError {
    Custom(Status::InternalServerError, Json(ErrorBody::new(message)))
}

/// Input problems are the client's fault; everything else is ours.
fn status_for(error: &PipelineError) -> Status {
    match error {
        PipelineError::InputInvalid(_) => Status::BadRequest,
        _ => Status::InternalServerError,
    }
}

pub async fn analyze_resume_handler(
    upload: Form<AnalyzeUploadForm<'_>>,
    analyzer: &State<Analyzer>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let AnalyzeUploadForm {
        resume,
        job_description,
    } = upload.into_inner();

    let mut resume = resume.ok_or_else(|| bad_request("Resume file is required"))?;
    let job_description =
        job_description.ok_or_else(|| bad_request("Job description is required"))?;

    let content_type = resume.content_type();
    if !content_type.map_or(false, |ct| ct.is_pdf()) {
        let received = content_type
            .map(|ct| ct.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        return Err(bad_request(format!(
            "Only PDF files are supported. Received: {}",
            received
        )));
    }

    if resume.len() > MAX_PDF_BYTES as u64 {
        return Err(bad_request("File size must be less than 10MB"));
    }

    let pdf_bytes = read_upload(&mut resume).await.map_err(|e| {
        error!("failed to read uploaded resume: {}", e);
        internal_error("Failed to process uploaded file")
    })?;

    info!(bytes = pdf_bytes.len(), "resume upload received");

    let cancel = CancellationToken::new();
    match analyzer.analyze(&pdf_bytes, &job_description, &cancel).await {
        Ok(outcome) => Ok(Json(AnalyzeResponse {
            analysis: outcome.analysis,
            warning: outcome.warning,
        })),
        Err(e) => {
            error!(error = %e, "resume analysis failed");
            Err(Custom(status_for(&e), Json(ErrorBody::new(e.to_string()))))
        }
    }
}

pub async fn generate_roadmap_handler(
    request: Json<RoadmapRequest>,
    generator: &State<RoadmapGenerator>,
) -> Result<Json<RoadmapGraph>, ApiError> {
    let skill = match request.skill.as_deref() {
        Some(s) => s.trim().to_string(),
        None => return Err(bad_request("Skill is required")),
    };
    let cancel = CancellationToken::new();

    match generator.generate(&skill, &cancel).await {
        Ok(graph) => Ok(Json(graph)),
        Err(e @ PipelineError::InputInvalid(_)) => Err(bad_request(e.to_string())),
        Err(e) => Err(internal_error(format!(
            "Failed to generate roadmap for {}: {}",
            skill, e
        ))),
    }
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Spill the multipart buffer to disk, read it back, and clean up. The
/// temp name only has to be unique within this process.
async fn read_upload(file: &mut TempFile<'_>) -> std::io::Result<Vec<u8>> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let temp_path = std::env::temp_dir().join(format!(
        "resume_upload_{}_{}",
        std::process::id(),
        nanos
    ));

    file.persist_to(&temp_path).await?;
    let bytes = tokio::fs::read(&temp_path).await;
    let _ = tokio::fs::remove_file(&temp_path).await;
    bytes
}
