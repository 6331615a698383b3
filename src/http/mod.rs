//! HTTP transport layer
//!
//! Lesson lookup and health endpoints live in `handlers`; the AI-backed
//! tutoring endpoints live in `tutor`.

pub mod handlers;
pub mod tutor;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Decodes a JSON request body, turning syntax errors and missing fields into a 400.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|err| AppError::bad_request(format!("invalid request body: {err}")))
}
