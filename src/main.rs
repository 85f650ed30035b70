use anyhow::Result;
use career_pipeline::{start_web_server, ConfigManager};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("career_pipeline=info,rocket::server=off")),
        )
        .init();

    let config = ConfigManager::load()?;

    info!("Starting resume analysis and roadmap API server");
    info!("Model: {}", config.generation.model);
    info!("Server: http://0.0.0.0:{}", config.port);

    start_web_server(config.generation, config.port).await
}
