//! Request/response transformations for Ollama

use crate::options::RequestOptions;
use serde_json::{Value, json};

/// Build the `/api/generate` request body. Sampling parameters travel in
/// the nested `options` object; `format` and `system` are omitted when
/// empty.
pub fn request_body(prompt: &str, options: &RequestOptions, stream: bool) -> Value {
    let mut sampling = json!({
        "temperature": options.f64_opt("temperature").unwrap_or(0.8),
        "top_p": options.f64_opt("topP").unwrap_or(0.9),
        "num_predict": options.u64_opt("numPredict").unwrap_or(1024),
    });
    if let Some(stop) = options.non_empty("stop") {
        sampling["stop"] = stop.clone();
    }
    let mut body = json!({
        "model": options.model(),
        "prompt": prompt,
        "stream": stream,
        "options": sampling,
    });
    if let Some(format) = options.non_empty("format") {
        body["format"] = format.clone();
    }
    if let Some(system) = options.non_empty("system") {
        body["system"] = system.clone();
    }
    body
}

/// Extract the completion from a non-streaming envelope
pub fn extract_completion(envelope: &Value) -> String {
    envelope["response"].as_str().unwrap_or_default().to_string()
}
