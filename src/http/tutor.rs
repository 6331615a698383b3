//! AI-backed tutoring endpoints
//!
//! Pronunciation feedback and transliteration degrade to a 200 response that
//! echoes the caller's input; conversation and Q&A return a 500 when the
//! primary model call fails because there is no useful fallback text.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::prompts::{
    answer_prompt, conversation_prompt, pronunciation_prompt, transliteration_prompt,
    user_translation_prompt, user_transliteration_prompt, vocabulary_extraction_prompt,
    ConversationTurn, PronunciationTarget, DEFAULT_LANGUAGE,
};
use crate::domain::vocabulary::{decode_vocabulary, VocabularyEntry};
use crate::http::parse_body;
use crate::{errors::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct PronunciationRequest {
    pub spoken_text: String,
    pub target_word: String,
    pub target_transliteration: String,
    pub target_meaning: String,
}

#[derive(Debug, Serialize)]
pub struct PronunciationResponse {
    pub feedback: String,
    pub spoken_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransliterateRequest {
    pub bengali_text: String,
}

#[derive(Debug, Serialize)]
pub struct TransliterateResponse {
    pub original: String,
    pub transliteration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConversationRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub user_message: String,
    pub ai_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_transliteration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_translation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    #[serde(default = "default_extract_vocabulary")]
    pub extract_vocabulary: bool,
}

fn default_extract_vocabulary() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: String,
    pub answer: String,
    pub extracted_words: Vec<VocabularyEntry>,
}

pub async fn analyze_pronunciation(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PronunciationResponse>, AppError> {
    let request: PronunciationRequest = parse_body(&body)?;
    let prompt = pronunciation_prompt(
        &request.spoken_text,
        &PronunciationTarget {
            word: &request.target_word,
            transliteration: &request.target_transliteration,
            meaning: &request.target_meaning,
        },
    );

    let response = match state.generator.generate(&prompt).await {
        Ok(feedback) => PronunciationResponse {
            feedback,
            spoken_text: request.spoken_text,
            error: None,
        },
        Err(err) => {
            warn!(error = %err, "pronunciation analysis failed, returning fallback");
            PronunciationResponse {
                feedback: pronunciation_fallback(&request.spoken_text),
                spoken_text: request.spoken_text,
                error: Some(err.to_string()),
            }
        }
    };

    Ok(Json(response))
}

pub fn pronunciation_fallback(spoken_text: &str) -> String {
    format!("Could not analyze pronunciation right now. You said: \"{spoken_text}\"")
}

pub async fn transliterate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TransliterateResponse>, AppError> {
    let request: TransliterateRequest = parse_body(&body)?;
    let prompt = transliteration_prompt(&request.bengali_text);

    let response = match state.generator.generate(&prompt).await {
        Ok(transliteration) => TransliterateResponse {
            original: request.bengali_text,
            transliteration,
            error: None,
        },
        Err(err) => {
            warn!(error = %err, "transliteration failed, returning fallback");
            TransliterateResponse {
                transliteration: transliteration_fallback(&request.bengali_text),
                original: request.bengali_text,
                error: Some(err.to_string()),
            }
        }
    };

    Ok(Json(response))
}

pub fn transliteration_fallback(text: &str) -> String {
    format!("[Transliteration unavailable: {text}]")
}

pub async fn conversation_practice(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConversationResponse>, AppError> {
    let request: ConversationRequest = parse_body(&body)?;
    let language = request
        .language
        .as_deref()
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE);

    let prompt = conversation_prompt(&request.message, &request.history, language);
    let ai_response = state.generator.generate(&prompt).await?;

    let (user_transliteration, user_translation) = if is_target_script(&request.message) {
        let transliteration_request = user_transliteration_prompt(&request.message, language);
        let translation_request = user_translation_prompt(&request.message, language);
        let (transliteration, translation) = tokio::join!(
            state.generator.generate(&transliteration_request),
            state.generator.generate(&translation_request),
        );

        (
            Some(transliteration.unwrap_or_else(|err| {
                warn!(error = %err, "user message transliteration failed");
                request.message.clone()
            })),
            Some(translation.unwrap_or_else(|err| {
                warn!(error = %err, "user message translation failed");
                request.message.clone()
            })),
        )
    } else {
        (None, None)
    };

    Ok(Json(ConversationResponse {
        user_message: request.message,
        ai_response,
        user_transliteration,
        user_translation,
    }))
}

/// True when the message contains a letter from a non-Latin script, i.e. it
/// was typed in the target language's own script. Accented Latin does not count.
fn is_target_script(message: &str) -> bool {
    message
        .chars()
        .any(|ch| ch.is_alphabetic() && !is_latin_letter(ch))
}

fn is_latin_letter(ch: char) -> bool {
    matches!(
        ch,
        'A'..='Z'
            | 'a'..='z'
            | '\u{00AA}'
            | '\u{00BA}'
            | '\u{00C0}'..='\u{024F}'
            | '\u{1D00}'..='\u{1DBF}'
            | '\u{1E00}'..='\u{1EFF}'
            | '\u{2C60}'..='\u{2C7F}'
            | '\u{A720}'..='\u{A7FF}'
            | '\u{AB30}'..='\u{AB6F}'
            | '\u{FB00}'..='\u{FB06}'
            | '\u{FF21}'..='\u{FF3A}'
            | '\u{FF41}'..='\u{FF5A}'
    )
}

pub async fn ask_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QuestionResponse>, AppError> {
    let request: QuestionRequest = parse_body(&body)?;
    let answer = state
        .generator
        .generate(&answer_prompt(&request.question))
        .await?;

    let extracted_words = if request.extract_vocabulary {
        match state
            .generator
            .generate(&vocabulary_extraction_prompt(&request.question, &answer))
            .await
        {
            Ok(reply) => decode_vocabulary(&reply),
            Err(err) => {
                warn!(error = %err, "vocabulary extraction failed");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    Ok(Json(QuestionResponse {
        question: request.question,
        answer,
        extracted_words,
    }))
}
