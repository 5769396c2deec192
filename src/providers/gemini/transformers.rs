//! Request/response transformations for Gemini

use crate::options::RequestOptions;
use serde_json::{Value, json};

/// Build the `generateContent` request body. The merged `generationConfig`
/// sub-map is passed through verbatim; Gemini tolerates empty
/// `stopSequences` inside it.
pub fn request_body(prompt: &str, options: &RequestOptions) -> Value {
    let mut body = json!({
        "contents": [{"parts": [{"text": prompt}]}],
    });
    if let Some(config) = options.non_empty("generationConfig") {
        body["generationConfig"] = config.clone();
    }
    body
}

/// Extract the completion from a non-streaming envelope
pub fn extract_completion(envelope: &Value) -> String {
    envelope["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
