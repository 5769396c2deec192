//! Mistral streaming via eventsource-stream
//!
//! Same data-only SSE dialect as OpenAI's chat completions: JSON chunks with
//! text at `choices[0].delta.content`, `[DONE]` sentinel at the end.

use crate::error::ProviderError;
use crate::utils::streaming::{SseEventConverter, SseEventFuture};
use eventsource_stream::Event;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct MistralStreamChunk {
    #[serde(default)]
    choices: Vec<MistralStreamChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct MistralStreamChoice {
    #[serde(default)]
    delta: Option<MistralDelta>,
}

#[derive(Debug, Clone, Deserialize)]
struct MistralDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Converts Mistral SSE chunks into text fragments
#[derive(Debug, Clone, Default)]
pub struct MistralEventConverter;

impl MistralEventConverter {
    fn extract_content(&self, chunk: MistralStreamChunk) -> Option<String> {
        chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta)
            .and_then(|delta| delta.content)
            .filter(|content| !content.is_empty())
    }
}

impl SseEventConverter for MistralEventConverter {
    fn convert_event(&self, event: Event) -> SseEventFuture<'_> {
        Box::pin(async move {
            match serde_json::from_str::<MistralStreamChunk>(&event.data) {
                Ok(chunk) => self.extract_content(chunk).map(Ok).into_iter().collect(),
                Err(e) => vec![Err(ProviderError::Parse(format!(
                    "undecodable stream chunk: {e}"
                )))],
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(data: &str) -> Event {
        Event {
            event: String::new(),
            data: data.to_string(),
            id: String::new(),
            retry: None,
        }
    }

    #[tokio::test]
    async fn delta_content_is_yielded() {
        let converter = MistralEventConverter;
        let result = converter
            .convert_event(event(r#"{"choices":[{"delta":{"role":"assistant","content":"Bon"}}]}"#))
            .await;
        assert_eq!(result[0].as_deref().unwrap(), "Bon");
    }

    #[tokio::test]
    async fn role_only_deltas_are_skipped() {
        let converter = MistralEventConverter;
        let result = converter
            .convert_event(event(r#"{"choices":[{"delta":{"role":"assistant"}}]}"#))
            .await;
        assert!(result.is_empty());
    }
}
