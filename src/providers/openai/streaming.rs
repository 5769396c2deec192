//! OpenAI streaming via eventsource-stream
//!
//! Data-only SSE: no event names, one JSON chunk per `data:` line, the
//! literal `[DONE]` terminates the stream (handled by the factory). Text
//! rides at `choices[0].delta.content`.

use crate::error::ProviderError;
use crate::utils::streaming::{SseEventConverter, SseEventFuture};
use eventsource_stream::Event;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct OpenAiStreamChunk {
    #[serde(default)]
    choices: Vec<OpenAiStreamChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct OpenAiStreamChoice {
    #[serde(default)]
    delta: Option<OpenAiDelta>,
}

#[derive(Debug, Clone, Deserialize)]
struct OpenAiDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Converts OpenAI SSE chunks into text fragments
#[derive(Debug, Clone, Default)]
pub struct OpenAiEventConverter;

impl OpenAiEventConverter {
    fn extract_content(&self, chunk: OpenAiStreamChunk) -> Option<String> {
        chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta)
            .and_then(|delta| delta.content)
            .filter(|content| !content.is_empty())
    }
}

impl SseEventConverter for OpenAiEventConverter {
    fn convert_event(&self, event: Event) -> SseEventFuture<'_> {
        Box::pin(async move {
            match serde_json::from_str::<OpenAiStreamChunk>(&event.data) {
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
        let converter = OpenAiEventConverter;
        let result = converter
            .convert_event(event(r#"{"choices":[{"delta":{"content":"Hel"}}]}"#))
            .await;
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].as_deref().unwrap(), "Hel");
    }

    #[tokio::test]
    async fn chunks_without_content_are_skipped() {
        let converter = OpenAiEventConverter;
        for data in [
            r#"{"choices":[{"delta":{}}]}"#,
            r#"{"choices":[{"delta":{"content":""}}]}"#,
            r#"{"choices":[]}"#,
            r#"{"id":"resp_1"}"#,
        ] {
            assert!(converter.convert_event(event(data)).await.is_empty());
        }
    }
}
