//! Common streaming utilities
//!
//! The four wire framings the providers use, reduced to one `TextStream`
//! shape:
//!
//! - SSE (named events or data-only with a `[DONE]` sentinel) via
//!   eventsource-stream, which owns UTF-8 and line buffering;
//! - newline-delimited JSON via a `LinesCodec` framed reader, which also
//!   flushes a final unterminated line at EOF;
//! - unframed JSON arrays via [`JsonObjectCodec`](crate::utils::json_codec);
//! - fixed-size re-chunking for providers with no native streaming.
//!
//! Each factory consumes the HTTP response lazily; dropping the returned
//! stream drops the response and closes the connection.

use crate::error::ProviderError;
use crate::stream::TextStream;
use crate::utils::json_codec::JsonObjectCodec;
use eventsource_stream::{Event, Eventsource};
use futures_util::StreamExt;
use std::future::Future;
use std::io;
use std::pin::Pin;
use tokio_util::codec::{FramedRead, LinesCodec};
use tokio_util::io::StreamReader;

/// Future type produced by SSE event conversion
pub type SseEventFuture<'a> =
    Pin<Box<dyn Future<Output = Vec<Result<String, ProviderError>>> + Send + Sync + 'a>>;

/// Converts one provider-specific SSE event into zero or more text fragments
pub trait SseEventConverter: Send + Sync {
    fn convert_event(&self, event: Event) -> SseEventFuture<'_>;

    /// Invoked for the `[DONE]` sentinel, before the stream ends
    fn handle_stream_end(&self) -> Option<Result<String, ProviderError>> {
        None
    }
}

/// Converts one NDJSON line into zero or more text fragments
pub trait NdjsonConverter: Send + Sync {
    fn convert_line(&self, line: &str) -> Vec<Result<String, ProviderError>>;
}

/// Converts one balanced JSON object (Gemini array streaming) into zero or
/// more text fragments
pub trait JsonObjectConverter: Send + Sync {
    fn convert_object(&self, object: &str) -> Vec<Result<String, ProviderError>>;
}

/// Factory for the provider-specific stream shapes
pub struct StreamFactory;

impl StreamFactory {
    /// Send `request_builder` and frame the SSE response through
    /// `converter`. A non-2xx status is returned as `Api` with the code
    /// intact so the retry controller can classify it. The stream ends at
    /// the `[DONE]` sentinel or at the first framing error.
    pub async fn sse_stream<C>(
        request_builder: reqwest::RequestBuilder,
        converter: C,
    ) -> Result<TextStream, ProviderError>
    where
        C: SseEventConverter + 'static,
    {
        let response = request_builder
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;
        let response = super::http::check_status(response).await?;

        let stream = async_stream::stream! {
            let mut events = response.bytes_stream().eventsource();
            while let Some(event) = events.next().await {
                match event {
                    Ok(event) => {
                        let data = event.data.trim();
                        if data == "[DONE]" {
                            if let Some(item) = converter.handle_stream_end() {
                                yield item;
                            }
                            break;
                        }
                        if data.is_empty() {
                            continue;
                        }
                        for item in converter.convert_event(event).await {
                            yield item;
                        }
                    }
                    Err(e) => {
                        yield Err(ProviderError::Stream(format!("SSE parsing error: {e}")));
                        break;
                    }
                }
            }
        };
        Ok(Box::pin(stream))
    }

    /// Frame an NDJSON response body line-wise through `converter`. The
    /// final line is processed even without a trailing newline.
    pub fn ndjson_stream<C>(response: reqwest::Response, converter: C) -> TextStream
    where
        C: NdjsonConverter + 'static,
    {
        let reader = StreamReader::new(response.bytes_stream().map(|chunk| chunk.map_err(io::Error::other)));
        let stream = async_stream::stream! {
            let mut lines = FramedRead::new(reader, LinesCodec::new());
            while let Some(line) = lines.next().await {
                match line {
                    Ok(line) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        for item in converter.convert_line(&line) {
                            yield item;
                        }
                    }
                    Err(e) => {
                        yield Err(ProviderError::Stream(format!("NDJSON framing error: {e}")));
                        break;
                    }
                }
            }
        };
        Box::pin(stream)
    }

    /// Frame a streamed JSON array body object-wise through `converter`.
    /// Objects are cut on balanced braces, so a chunk boundary can never
    /// split or merge frames.
    pub fn json_array_stream<C>(response: reqwest::Response, converter: C) -> TextStream
    where
        C: JsonObjectConverter + 'static,
    {
        let reader = StreamReader::new(response.bytes_stream().map(|chunk| chunk.map_err(io::Error::other)));
        let stream = async_stream::stream! {
            let mut objects = FramedRead::new(reader, JsonObjectCodec::new());
            while let Some(object) = objects.next().await {
                match object {
                    Ok(object) => {
                        for item in converter.convert_object(&object) {
                            yield item;
                        }
                    }
                    Err(e) => {
                        yield Err(ProviderError::Stream(format!("JSON framing error: {e}")));
                        break;
                    }
                }
            }
        };
        Box::pin(stream)
    }

    /// Split completed text into fragments of at most `chunk_size`
    /// characters, for providers without native streaming. Splits on char
    /// boundaries; a smaller final fragment carries the remainder.
    pub fn rechunk(text: &str, chunk_size: usize) -> TextStream {
        let chunk_size = chunk_size.max(1);
        let mut chunks = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let split = rest
                .char_indices()
                .nth(chunk_size)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let (piece, tail) = rest.split_at(split);
            chunks.push(piece.to_string());
            rest = tail;
        }
        Box::pin(futures::stream::iter(chunks.into_iter().map(Ok)))
    }
}
