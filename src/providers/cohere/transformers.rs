//! Request/response transformations for Cohere

use crate::options::RequestOptions;
use serde_json::{Value, json};

/// Build the `/v1/chat` request body.
///
/// Two gating regimes, matching Cohere's API surface: `chat_history`,
/// `max_tokens`, `stop_sequences` and `preamble` are omitted when empty,
/// while the sampling knobs (`temperature`, `p`, `k`, the penalties) go out
/// whenever the key is present at all — `k: 0` is a meaningful value there.
pub fn request_body(prompt: &str, options: &RequestOptions, stream: bool) -> Value {
    let mut body = json!({
        "model": options.model(),
        "message": prompt,
    });
    if let Some(history) = options.non_empty("chatHistory") {
        body["chat_history"] = history.clone();
    }
    if let Some(max_tokens) = options.non_empty("maxTokens") {
        body["max_tokens"] = max_tokens.clone();
    }
    if let Some(temperature) = options.get("temperature") {
        body["temperature"] = temperature.clone();
    }
    if let Some(p) = options.get("p") {
        body["p"] = p.clone();
    }
    if let Some(k) = options.get("k") {
        body["k"] = k.clone();
    }
    if let Some(frequency_penalty) = options.get("frequencyPenalty") {
        body["frequency_penalty"] = frequency_penalty.clone();
    }
    if let Some(presence_penalty) = options.get("presencePenalty") {
        body["presence_penalty"] = presence_penalty.clone();
    }
    if let Some(stop) = options.non_empty("stopSequences") {
        body["stop_sequences"] = stop.clone();
    }
    if let Some(preamble) = options.non_empty("preamble") {
        body["preamble"] = preamble.clone();
    }
    if stream {
        body["stream"] = Value::Bool(true);
    }
    body
}

/// Extract the completion from a non-streaming envelope
pub fn extract_completion(envelope: &Value) -> String {
    envelope["text"].as_str().unwrap_or_default().to_string()
}
