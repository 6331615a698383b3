//! Prompt templates sent to the text generation model
//!
//! Caller input is embedded verbatim; nothing here trims or escapes it.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "Bengali";
pub const MAX_HISTORY_TURNS: usize = 4;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConversationTurn {
    pub sender: String,
    pub text: String,
}

pub struct PronunciationTarget<'a> {
    pub word: &'a str,
    pub transliteration: &'a str,
    pub meaning: &'a str,
}

pub fn pronunciation_prompt(spoken_text: &str, target: &PronunciationTarget<'_>) -> String {
    format!(
        "You are a friendly Bengali pronunciation coach.\n\
         The learner was asked to say the word \"{word}\" (transliteration: \"{translit}\", meaning: \"{meaning}\").\n\
         Speech recognition heard: \"{spoken}\".\n\
         In two or three short sentences, tell the learner whether they said it correctly, \
         point out any sounds that differ, and give one concrete tip to improve. \
         Be encouraging and write in English.",
        word = target.word,
        translit = target.transliteration,
        meaning = target.meaning,
        spoken = spoken_text,
    )
}

pub fn transliteration_prompt(bengali_text: &str) -> String {
    format!(
        "Transliterate the following Bengali text into the Latin alphabet as it is pronounced.\n\
         Reply with the transliteration only, without quotes, explanations or translation.\n\n\
         {bengali_text}"
    )
}

/// Renders at most the last [`MAX_HISTORY_TURNS`] turns, skipping blank ones.
pub fn render_history(history: &[ConversationTurn]) -> Option<String> {
    let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
    let lines: Vec<String> = history[start..]
        .iter()
        .filter(|turn| !turn.text.trim().is_empty())
        .map(|turn| format!("{}: {}", speaker_label(&turn.sender), turn.text))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn speaker_label(sender: &str) -> &str {
    match sender.trim().to_ascii_lowercase().as_str() {
        "user" | "learner" | "student" => "Learner",
        "ai" | "bot" | "assistant" | "tutor" | "model" => "Tutor",
        _ => sender.trim(),
    }
}

pub fn conversation_prompt(message: &str, history: &[ConversationTurn], language: &str) -> String {
    let mut prompt = format!(
        "You are a patient {language} tutor having a casual conversation with a beginner.\n\
         Reply in simple {language}, in one to three short sentences, and keep the conversation going \
         with a question. After your reply, add the English translation in parentheses. \
         If the learner made a mistake, gently correct it first.\n"
    );

    if let Some(history) = render_history(history) {
        prompt.push_str("\nConversation so far:\n");
        prompt.push_str(&history);
        prompt.push('\n');
    }

    prompt.push_str(&format!("\nLearner: {message}\nTutor:"));
    prompt
}

pub fn user_transliteration_prompt(message: &str, language: &str) -> String {
    format!(
        "Transliterate this {language} sentence into the Latin alphabet. \
         Reply with the transliteration only.\n\n{message}"
    )
}

pub fn user_translation_prompt(message: &str, language: &str) -> String {
    format!(
        "Translate this {language} sentence into plain English. \
         Reply with the translation only.\n\n{message}"
    )
}

pub fn answer_prompt(question: &str) -> String {
    format!(
        "You are a helpful Bengali language tutor for English speakers.\n\
         Answer the learner's question clearly and briefly. Whenever you use a Bengali word, \
         write it in Bengali script followed by its transliteration and English meaning.\n\n\
         Question: {question}"
    )
}

pub fn vocabulary_extraction_prompt(question: &str, answer: &str) -> String {
    format!(
        "From the tutoring exchange below, list every Bengali word or phrase that was taught.\n\
         Respond with ONLY a JSON array and no other text. Each element must be an object with \
         the keys \"bengaliText\", \"transliteration\" and \"englishMeaning\". \
         If no Bengali vocabulary was taught, respond with [].\n\n\
         Question: {question}\n\nAnswer: {answer}"
    )
}
