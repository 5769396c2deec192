//! Request/response transformations for Claude
//!
//! Pure functions between the normalized options map and Claude's wire
//! shapes, testable without I/O.

use crate::options::RequestOptions;
use serde_json::{Value, json};

/// Build the `/v1/messages` request body. Optional fields are omitted when
/// empty rather than sent as nulls.
pub fn request_body(prompt: &str, options: &RequestOptions, stream: bool) -> Value {
    let mut body = json!({
        "model": options.model(),
        "max_tokens": options.u64_opt("maxTokens").unwrap_or(1024),
        "messages": [{"role": "user", "content": prompt}],
    });
    if let Some(system) = options.non_empty("system") {
        body["system"] = system.clone();
    }
    if let Some(stop) = options.non_empty("stopSequences") {
        body["stop_sequences"] = stop.clone();
    }
    if let Some(temperature) = options.non_empty("temperature") {
        body["temperature"] = temperature.clone();
    }
    if let Some(top_p) = options.non_empty("topP") {
        body["top_p"] = top_p.clone();
    }
    if let Some(top_k) = options.non_empty("topK") {
        body["top_k"] = top_k.clone();
    }
    if stream {
        body["stream"] = Value::Bool(true);
    }
    body
}

/// Extract the completion from a non-streaming envelope
pub fn extract_completion(envelope: &Value) -> String {
    envelope["content"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
