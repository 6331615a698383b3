//! Axum handlers for lesson content and service metadata

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::prompts::DEFAULT_LANGUAGE;
use crate::{errors::AppError, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct LessonQuery {
    pub lang: Option<String>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn lesson(
    State(state): State<AppState>,
    Query(query): Query<LessonQuery>,
) -> Result<Json<Value>, AppError> {
    let language = query
        .lang
        .as_deref()
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE);

    debug!(language, path = %state.lessons.path().display(), "loading lesson");
    let lesson = state.lessons.lesson(language).await?;
    Ok(Json(lesson))
}
