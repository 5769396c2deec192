//! Cohere streaming over newline-delimited JSON
//!
//! Each line is a standalone event object. Only `event_type ==
//! "text-generation"` lines carry text; `stream-start` and `stream-end`
//! bookkeeping lines are dropped.

use crate::error::ProviderError;
use crate::utils::streaming::NdjsonConverter;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct CohereStreamEvent {
    #[serde(default)]
    event_type: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// Converts Cohere NDJSON lines into text fragments
#[derive(Debug, Clone, Default)]
pub struct CohereLineConverter;

impl NdjsonConverter for CohereLineConverter {
    fn convert_line(&self, line: &str) -> Vec<Result<String, ProviderError>> {
        match serde_json::from_str::<CohereStreamEvent>(line) {
            Ok(event) if event.event_type.as_deref() == Some("text-generation") => event
                .text
                .filter(|text| !text.is_empty())
                .map(Ok)
                .into_iter()
                .collect(),
            Ok(_) => vec![],
            Err(e) => vec![Err(ProviderError::Parse(format!(
                "undecodable stream line: {e}"
            )))],
        }
    }
}
