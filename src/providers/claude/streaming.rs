//! Claude streaming via eventsource-stream
//!
//! Claude frames its stream as SSE with named events (`message_start`,
//! `content_block_delta`, `message_delta`, ...). Only `content_block_delta`
//! events carry text, at `delta.text`; everything else is dropped.

use crate::error::ProviderError;
use crate::utils::streaming::{SseEventConverter, SseEventFuture};
use eventsource_stream::Event;
use serde::Deserialize;

/// Claude stream event, flexible enough for every event type on the wire
#[derive(Debug, Clone, Deserialize)]
struct ClaudeStreamEvent {
    r#type: String,
    #[serde(default)]
    delta: Option<ClaudeDelta>,
    #[serde(default)]
    error: Option<ClaudeStreamError>,
}

#[derive(Debug, Clone, Deserialize)]
struct ClaudeDelta {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ClaudeStreamError {
    #[serde(default)]
    message: Option<String>,
}

/// Converts Claude SSE events into text fragments
#[derive(Debug, Clone, Default)]
pub struct ClaudeEventConverter;

impl ClaudeEventConverter {
    fn convert_claude_event(&self, event: ClaudeStreamEvent) -> Vec<Result<String, ProviderError>> {
        match event.r#type.as_str() {
            "content_block_delta" => event
                .delta
                .and_then(|delta| delta.text)
                .filter(|text| !text.is_empty())
                .map(Ok)
                .into_iter()
                .collect(),
            "error" => {
                let message = event
                    .error
                    .and_then(|e| e.message)
                    .unwrap_or_else(|| "unknown error".to_string());
                vec![Err(ProviderError::Stream(format!(
                    "backend reported stream error: {message}"
                )))]
            }
            // message_start, message_delta, ping, content_block_start/stop,
            // message_stop carry no text.
            _ => vec![],
        }
    }
}

impl SseEventConverter for ClaudeEventConverter {
    fn convert_event(&self, event: Event) -> SseEventFuture<'_> {
        Box::pin(async move {
            match serde_json::from_str::<ClaudeStreamEvent>(&event.data) {
                Ok(parsed) => self.convert_claude_event(parsed),
                Err(e) => vec![Err(ProviderError::Parse(format!(
                    "undecodable stream event: {e}"
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
    async fn content_block_delta_yields_its_text() {
        let converter = ClaudeEventConverter;
        let result = converter
            .convert_event(event(
                r#"{"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"Hello"}}"#,
            ))
            .await;
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].as_deref().unwrap(), "Hello");
    }

    #[tokio::test]
    async fn non_delta_events_yield_nothing() {
        let converter = ClaudeEventConverter;
        for data in [
            r#"{"type":"message_start","message":{"id":"msg_1","role":"assistant"}}"#,
            r#"{"type":"ping"}"#,
            r#"{"type":"message_stop"}"#,
            r#"{"type":"content_block_delta","delta":{"type":"text_delta","text":""}}"#,
        ] {
            assert!(converter.convert_event(event(data)).await.is_empty());
        }
    }

    #[tokio::test]
    async fn error_events_surface_as_stream_errors() {
        let converter = ClaudeEventConverter;
        let result = converter
            .convert_event(event(
                r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#,
            ))
            .await;
        assert!(matches!(&result[0], Err(ProviderError::Stream(m)) if m.contains("Overloaded")));
    }

    #[tokio::test]
    async fn undecodable_data_surfaces_as_parse_error() {
        let converter = ClaudeEventConverter;
        let result = converter.convert_event(event("not json")).await;
        assert!(matches!(&result[0], Err(ProviderError::Parse(_))));
    }
}
