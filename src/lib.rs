use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub mod config;
pub mod domain;
pub mod errors;
pub mod gemini;
pub mod http;
pub mod lessons;
pub mod logging;

use gemini::TextGenerator;
use lessons::LessonStore;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub lessons: LessonStore,
    pub cors_allowed_origins: Option<Arc<[HeaderValue]>>,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        lessons: LessonStore,
        cors_allowed_origins: Option<Vec<HeaderValue>>,
    ) -> Self {
        Self {
            generator,
            lessons,
            cors_allowed_origins: cors_allowed_origins.map(Arc::from),
        }
    }
}

fn cors_layer(allowed_origins: Option<&[HeaderValue]>) -> CorsLayer {
    let allow_origin = match allowed_origins {
        Some(origins) => AllowOrigin::list(origins.iter().cloned()),
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(state.cors_allowed_origins.as_deref());

    Router::new()
        .route("/health", get(http::handlers::health))
        .route("/lesson", get(http::handlers::lesson))
        .route(
            "/analyze-pronunciation",
            post(http::tutor::analyze_pronunciation),
        )
        .route("/transliterate", post(http::tutor::transliterate))
        .route(
            "/conversation-practice",
            post(http::tutor::conversation_practice),
        )
        .route("/ask-question", post(http::tutor::ask_question))
        .layer(cors)
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
