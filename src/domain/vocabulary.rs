//! Best-effort decoding of vocabulary lists from free-form model output

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```[A-Za-z0-9_-]*\s*(.*?)\s*```$").expect("code fence pattern is valid")
});

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    #[serde(alias = "bengali_text", alias = "word")]
    pub bengali_text: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default, alias = "english_meaning", alias = "meaning")]
    pub english_meaning: String,
}

/// Decodes a JSON array of vocabulary entries out of `text`.
///
/// Never fails: anything that cannot be decoded yields an empty list.
/// Elements that are not entry objects or lack `bengaliText` are dropped.
pub fn decode_vocabulary(text: &str) -> Vec<VocabularyEntry> {
    let unfenced = strip_code_fence(text.trim());

    let array = match serde_json::from_str::<Value>(unfenced) {
        Ok(Value::Array(items)) => Some(items),
        _ => outermost_array(unfenced),
    };

    array
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| serde_json::from_value::<VocabularyEntry>(item).ok())
        .filter(|entry| !entry.bengali_text.trim().is_empty())
        .map(|entry| VocabularyEntry {
            bengali_text: entry.bengali_text.trim().to_string(),
            transliteration: entry.transliteration.trim().to_string(),
            english_meaning: entry.english_meaning.trim().to_string(),
        })
        .collect()
}

fn strip_code_fence(text: &str) -> &str {
    CODE_FENCE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map_or(text, |inner| inner.as_str())
}

fn outermost_array(text: &str) -> Option<Vec<Value>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(bengali: &str, translit: &str, meaning: &str) -> VocabularyEntry {
        VocabularyEntry {
            bengali_text: bengali.to_string(),
            transliteration: translit.to_string(),
            english_meaning: meaning.to_string(),
        }
    }

    #[test]
    fn decodes_plain_array() {
        let words = decode_vocabulary(
            r#"[{"bengaliText": "জল", "transliteration": "jol", "englishMeaning": "water"}]"#,
        );
        assert_eq!(words, vec![entry("জল", "jol", "water")]);
    }

    #[test]
    fn strips_json_code_fence() {
        let reply = "```json\n[\n  {\"bengaliText\": \"ভাত\", \"transliteration\": \"bhat\", \"englishMeaning\": \"rice\"}\n]\n```";
        assert_eq!(decode_vocabulary(reply), vec![entry("ভাত", "bhat", "rice")]);
    }

    #[test]
    fn strips_bare_code_fence() {
        let reply = "```\n[{\"bengaliText\": \"মা\"}]\n```";
        assert_eq!(decode_vocabulary(reply), vec![entry("মা", "", "")]);
    }

    #[test]
    fn finds_array_inside_prose() {
        let reply = "Sure! Here are the words:\n[{\"bengali_text\": \"বই\", \"transliteration\": \"boi\", \"english_meaning\": \"book\"}]\nHappy learning.";
        assert_eq!(decode_vocabulary(reply), vec![entry("বই", "boi", "book")]);
    }

    #[test]
    fn non_json_text_yields_empty_list() {
        assert!(decode_vocabulary("I could not find any vocabulary.").is_empty());
        assert!(decode_vocabulary("").is_empty());
        assert!(decode_vocabulary("] nonsense [").is_empty());
    }

    #[test]
    fn non_array_json_yields_empty_list() {
        assert!(decode_vocabulary(r#"{"bengaliText": "জল"}"#).is_empty());
    }

    #[test]
    fn drops_invalid_elements_and_keeps_valid_ones() {
        let reply = r#"[
            {"bengaliText": "  ", "transliteration": "x"},
            "just a string",
            {"transliteration": "no word"},
            {"bengaliText": " দুধ ", "transliteration": " dudh ", "englishMeaning": "milk "}
        ]"#;
        assert_eq!(decode_vocabulary(reply), vec![entry("দুধ", "dudh", "milk")]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(entry("জল", "jol", "water")).expect("serialize");
        assert_eq!(json["bengaliText"], "জল");
        assert_eq!(json["englishMeaning"], "water");
    }
}
