use std::sync::Arc;

use bhasha_tutor::{
    build_app, config::Config, gemini::GeminiClient, lessons::LessonStore, logging, AppState,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let client = GeminiClient::from_config(&config)?;
    if !client.has_api_key() {
        warn!("GEMINI_API_KEY is not set; AI-backed endpoints will return fallback or error responses");
    }

    let bind_socket = config.bind_socket()?;
    let state = AppState::new(
        Arc::new(client),
        LessonStore::new(config.lessons_path.clone()),
        config.cors_allowed_origins.clone(),
    );
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        model = %config.gemini_model,
        lessons_path = %config.lessons_path.display(),
        "server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
