//! Request/response transformations for OpenAI

use crate::options::RequestOptions;
use serde_json::{Value, json};

/// Build the `/v1/responses` request body. The sampling parameters always
/// go out; only `stop` is optional.
pub fn request_body(prompt: &str, options: &RequestOptions, stream: bool) -> Value {
    let mut body = json!({
        "model": options.model(),
        "input": prompt,
        "temperature": options.f64_opt("temperature").unwrap_or(1.0),
        "top_p": options.f64_opt("topP").unwrap_or(1.0),
        "max_output_tokens": options.u64_opt("maxOutputTokens").unwrap_or(1024),
        "stream": stream,
    });
    if let Some(stop) = options.non_empty("stop") {
        body["stop"] = stop.clone();
    }
    body
}

/// Extract the completion from a non-streaming envelope
pub fn extract_completion(envelope: &Value) -> String {
    envelope["output"][0]["content"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
