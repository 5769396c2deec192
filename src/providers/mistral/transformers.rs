//! Request/response transformations for Mistral

use crate::options::RequestOptions;
use serde_json::{Value, json};

/// Build the `/v1/chat/completions` request body. Mistral takes the full
/// sampling block on every call, including `stream` and `safe_prompt`; only
/// `stop` is optional.
pub fn request_body(prompt: &str, options: &RequestOptions, stream: bool) -> Value {
    let mut body = json!({
        "model": options.model(),
        "messages": [{"role": "user", "content": prompt}],
        "temperature": options.f64_opt("temperature").unwrap_or(0.7),
        "top_p": options.f64_opt("topP").unwrap_or(1.0),
        "max_tokens": options.u64_opt("maxTokens").unwrap_or(1024),
        "random_seed": options.u64_opt("randomSeed").unwrap_or(0),
        "stream": stream,
        "safe_prompt": options.bool_opt("safePrompt").unwrap_or(false),
    });
    if let Some(stop) = options.non_empty("stop") {
        body["stop"] = stop.clone();
    }
    body
}

/// Extract the completion from a non-streaming envelope
pub fn extract_completion(envelope: &Value) -> String {
    envelope["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
