// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::analysis::Analyzer;
use crate::config::GenerationConfig;
use crate::roadmap::{RoadmapGenerator, RoadmapGraph};
use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/analyze-resume", data = "<upload>")]
pub async fn analyze_resume(
    upload: Form<AnalyzeUploadForm<'_>>,
    analyzer: &State<Analyzer>,
) -> Result<Json<AnalyzeResponse>, handlers::ApiError> {
    handlers::analyze_resume_handler(upload, analyzer).await
}

#[post("/roadmap", data = "<request>")]
pub async fn generate_roadmap(
    request: Json<RoadmapRequest>,
    generator: &State<RoadmapGenerator>,
) -> Result<Json<RoadmapGraph>, handlers::ApiError> {
    handlers::generate_roadmap_handler(request, generator).await
}

#[get("/health")]
pub async fn health() -> Json<serde_json::Value> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request_catcher() -> Json<ErrorBody> {
    Json(ErrorBody::new("Invalid request format"))
}

#[rocket::catch(404)]
pub fn not_found_catcher() -> Json<ErrorBody> {
    Json(ErrorBody::new("Endpoint not found"))
}

#[rocket::catch(413)]
pub fn payload_too_large_catcher() -> Json<ErrorBody> {
    Json(ErrorBody::new("File size must be less than 10MB"))
}

// Data-guard failures (unparseable JSON, malformed multipart) are client
// errors on this API, so they are re-mapped from Rocket's default 422.
#[rocket::catch(422)]
pub fn unprocessable_catcher() -> Custom<Json<ErrorBody>> {
    Custom(
        Status::BadRequest,
        Json(ErrorBody::new("Invalid request format")),
    )
}

#[rocket::catch(500)]
pub fn internal_error_catcher() -> Json<ErrorBody> {
    Json(ErrorBody::new("Internal server error"))
}

pub fn build_rocket(
    config: GenerationConfig,
    port: u16,
) -> Result<rocket::Rocket<rocket::Build>> {
    let analyzer = Analyzer::new(config.clone())?;
    let generator = RoadmapGenerator::new(config)?;

    // The form limit sits above the 10MB document cap so oversize uploads
    // reach the handler and get the documented error body instead of a
    // bare 413.
    let limits = Limits::default()
        .limit("file", 12.mebibytes())
        .limit("data-form", 12.mebibytes());

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"))
        .merge(("limits", limits));

    Ok(rocket::custom(figment)
        .attach(Cors)
        .manage(analyzer)
        .manage(generator)
        .register(
            "/api",
            catchers![
                bad_request_catcher,
                not_found_catcher,
                payload_too_large_catcher,
                unprocessable_catcher,
                internal_error_catcher
            ],
        )
        .mount(
            "/api",
            routes![analyze_resume, generate_roadmap, health, options],
        ))
}

// Main server start function
pub async fn start_web_server(config: GenerationConfig, port: u16) -> Result<()> {
    info!("Starting resume analysis API server");
    info!("Server: http://0.0.0.0:{}", port);

    let _rocket = build_rocket(config, port)?.launch().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::ContentType;
    use rocket::local::asynchronous::Client;

    async fn test_client() -> Client {
        let config = GenerationConfig::new("test-key".to_string())
            .with_base_url("http://127.0.0.1:1".to_string());
        let rocket = build_rocket(config, 8000).unwrap();
        Client::tracked(rocket).await.unwrap()
    }

    async fn error_body(response: rocket::local::asynchronous::LocalResponse<'_>) -> String {
        let body = response.into_string().await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        value["error"].as_str().unwrap().to_string()
    }

    #[rocket::async_test]
    async fn test_roadmap_missing_skill_is_bad_request() {
        let client = test_client().await;
        let response = client
            .post("/api/roadmap")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(error_body(response).await, "Skill is required");
    }

    #[rocket::async_test]
    async fn test_roadmap_blank_skill_is_bad_request() {
        let client = test_client().await;
        let response = client
            .post("/api/roadmap")
            .header(ContentType::JSON)
            .body(r#"{"skill": "   "}"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(error_body(response).await, "Skill name must not be empty");
    }

    #[rocket::async_test]
    async fn test_unparseable_body_is_bad_request_with_error_body() {
        let client = test_client().await;
        let response = client
            .post("/api/roadmap")
            .header(ContentType::JSON)
            .body("not json at all")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(error_body(response).await, "Invalid request format");
    }

    #[rocket::async_test]
    async fn test_analyze_missing_job_description_is_bad_request() {
        let boundary = "----test-boundary";
        let body = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"resume.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             %PDF-1.4 stub\r\n\
             --{b}--\r\n",
            b = boundary
        );

        let client = test_client().await;
        let response = client
            .post("/api/analyze-resume")
            .header(Header::new(
                "Content-Type",
                format!("multipart/form-data; boundary={}", boundary),
            ))
            .body(body)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(error_body(response).await, "Job description is required");
    }

    #[rocket::async_test]
    async fn test_analyze_missing_resume_is_bad_request() {
        let boundary = "----test-boundary";
        let body = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"jobDescription\"\r\n\r\n\
             a sufficiently long job description\r\n\
             --{b}--\r\n",
            b = boundary
        );

        let client = test_client().await;
        let response = client
            .post("/api/analyze-resume")
            .header(Header::new(
                "Content-Type",
                format!("multipart/form-data; boundary={}", boundary),
            ))
            .body(body)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(error_body(response).await, "Resume file is required");
    }
}
