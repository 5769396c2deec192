//! Ollama streaming over newline-delimited JSON
//!
//! Each line carries a piece of the completion in `response`; the closing
//! line has `done: true` and an empty `response`.

use crate::error::ProviderError;
use crate::utils::streaming::NdjsonConverter;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct OllamaStreamLine {
    #[serde(default)]
    response: Option<String>,
}

/// Converts Ollama NDJSON lines into text fragments
#[derive(Debug, Clone, Default)]
pub struct OllamaLineConverter;

impl NdjsonConverter for OllamaLineConverter {
    fn convert_line(&self, line: &str) -> Vec<Result<String, ProviderError>> {
        match serde_json::from_str::<OllamaStreamLine>(line) {
            Ok(parsed) => parsed
                .response
                .filter(|response| !response.is_empty())
                .map(Ok)
                .into_iter()
                .collect(),
            Err(e) => vec![Err(ProviderError::Parse(format!(
                "undecodable stream line: {e}"
            )))],
        }
    }
}
