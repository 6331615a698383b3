use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LessonError {
    #[error("{0} not found")]
    ContentMissing(String),
    #[error("{file} could not be read as lesson content: {reason}")]
    ContentMalformed { file: String, reason: String },
    #[error("No data found for {0}")]
    UnknownLanguage(String),
}

/// File-backed lesson content, re-read on every lookup.
#[derive(Debug, Clone)]
pub struct LessonStore {
    path: PathBuf,
}

impl LessonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn lesson(&self, language: &str) -> Result<Value, LessonError> {
        let file = self.file_name();
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => LessonError::ContentMissing(file.clone()),
                _ => LessonError::ContentMalformed {
                    file: file.clone(),
                    reason: err.to_string(),
                },
            })?;

        let document: Value =
            serde_json::from_str(&raw).map_err(|err| LessonError::ContentMalformed {
                file: file.clone(),
                reason: err.to_string(),
            })?;

        let Value::Object(mut languages) = document else {
            return Err(LessonError::ContentMalformed {
                file,
                reason: "top-level value must be an object".to_string(),
            });
        };

        match languages.remove(language) {
            Some(Value::Null) | None => Err(LessonError::UnknownLanguage(language.to_string())),
            Some(lesson) => Ok(lesson),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
