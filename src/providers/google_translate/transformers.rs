//! Request/response transformations for Google Translate

use crate::options::RequestOptions;
use serde_json::{Value, json};

/// Build the `translate/v2` request body. `source`, `format`, `model` and
/// `cid` are omitted when empty; leaving `source` out enables language
/// auto-detection.
pub fn request_body(prompt: &str, options: &RequestOptions) -> Value {
    let mut body = json!({
        "q": prompt,
        "target": options.str_opt("targetLang").unwrap_or("en"),
    });
    if let Some(source) = options.non_empty("sourceLang") {
        body["source"] = source.clone();
    }
    if let Some(format) = options.non_empty("format") {
        body["format"] = format.clone();
    }
    if let Some(model) = options.non_empty("model") {
        body["model"] = model.clone();
    }
    if let Some(cid) = options.non_empty("cid") {
        body["cid"] = cid.clone();
    }
    body
}

/// Extract the translation from the response envelope
pub fn extract_completion(envelope: &Value) -> String {
    envelope["data"]["translations"][0]["translatedText"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
