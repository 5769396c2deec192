//! Shared helpers for the wire-format fixture tests: load captured stream
//! bodies from `tests/fixtures/` and drive them through the converters.
#![allow(dead_code)]

use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use omnitext::error::ProviderError;
use omnitext::utils::json_codec::JsonObjectCodec;
use omnitext::utils::streaming::{JsonObjectConverter, NdjsonConverter, SseEventConverter};
use std::io;
use tokio_util::codec::{FramedRead, LinesCodec};

/// Load an `.sse` fixture and split it into wire frames (events separated
/// by blank lines), restoring each frame's terminator so the parser sees
/// real event boundaries.
pub fn load_sse_frames(path: &str) -> io::Result<Vec<Result<Vec<u8>, io::Error>>> {
    let raw = std::fs::read_to_string(path)?;
    let normalized = raw.replace("\r\n", "\n");
    let mut frames = Vec::new();
    for frame in normalized.split("\n\n") {
        let frame = frame.trim_end_matches('\n');
        if frame.is_empty() {
            continue;
        }
        frames.push(Ok(format!("{frame}\n\n").into_bytes()));
    }
    Ok(frames)
}

/// Feed SSE frames through a converter with the factory's pump semantics:
/// `[DONE]` ends the stream, empty keep-alive data is skipped.
pub async fn collect_sse_fragments<C>(
    frames: Vec<Result<Vec<u8>, io::Error>>,
    converter: C,
) -> Vec<Result<String, ProviderError>>
where
    C: SseEventConverter,
{
    let mut events = futures_util::stream::iter(frames).eventsource();
    let mut fragments = Vec::new();
    while let Some(event) = events.next().await {
        let event = event.expect("well-formed SSE fixture");
        let data = event.data.trim();
        if data == "[DONE]" {
            if let Some(item) = converter.handle_stream_end() {
                fragments.push(item);
            }
            break;
        }
        if data.is_empty() {
            continue;
        }
        fragments.extend(converter.convert_event(event).await);
    }
    fragments
}

/// Feed an NDJSON fixture through a converter line by line. The fixture is
/// read as raw bytes, so a missing final newline exercises the EOF flush.
pub async fn collect_ndjson_fragments<C>(
    path: &str,
    converter: C,
) -> Vec<Result<String, ProviderError>>
where
    C: NdjsonConverter,
{
    let bytes = std::fs::read(path).expect("read fixture");
    let mut lines = FramedRead::new(bytes.as_slice(), LinesCodec::new());
    let mut fragments = Vec::new();
    while let Some(line) = lines.next().await {
        let line = line.expect("well-formed NDJSON fixture");
        if line.trim().is_empty() {
            continue;
        }
        fragments.extend(converter.convert_line(&line));
    }
    fragments
}

/// Feed a captured JSON array body through the brace-matching codec and the
/// object converter.
pub async fn collect_json_fragments<C>(
    path: &str,
    converter: C,
) -> Vec<Result<String, ProviderError>>
where
    C: JsonObjectConverter,
{
    let bytes = std::fs::read(path).expect("read fixture");
    let mut objects = FramedRead::new(bytes.as_slice(), JsonObjectCodec::new());
    let mut fragments = Vec::new();
    while let Some(object) = objects.next().await {
        let object = object.expect("balanced fixture objects");
        fragments.extend(converter.convert_object(&object));
    }
    fragments
}
