//! Gemini streaming over an unframed JSON array
//!
//! `streamGenerateContent` sends `[ {..}, {..}, ... ]` with objects split
//! arbitrarily across chunks. The codec layer recovers one balanced object
//! at a time; this converter extracts the candidate text. An object carrying
//! only `usageMetadata` marks the tail of the stream but is informational —
//! the converter simply finds no text in it and moves on, never cutting the
//! stream short.

use crate::error::ProviderError;
use crate::utils::streaming::JsonObjectConverter;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct GeminiStreamObject {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

/// Converts recovered Gemini array objects into text fragments
#[derive(Debug, Clone, Default)]
pub struct GeminiObjectConverter;

impl GeminiObjectConverter {
    fn extract_text(&self, object: GeminiStreamObject) -> Option<String> {
        object
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.is_empty())
    }
}

impl JsonObjectConverter for GeminiObjectConverter {
    fn convert_object(&self, object: &str) -> Vec<Result<String, ProviderError>> {
        match serde_json::from_str::<GeminiStreamObject>(object) {
            Ok(parsed) => self.extract_text(parsed).map(Ok).into_iter().collect(),
            Err(e) => vec![Err(ProviderError::Parse(format!(
                "undecodable stream object: {e}"
            )))],
        }
    }
}
