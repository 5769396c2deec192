//! Request/response transformations for DeepL

use crate::options::RequestOptions;
use serde_json::Value;

/// Build the `/v2/translate` form fields. String options are forwarded when
/// non-empty; boolean flags become the literal `1` and are dropped when
/// false.
pub fn form_fields(prompt: &str, options: &RequestOptions) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("auth_key", options.api_key().to_string()),
        ("text", prompt.to_string()),
        (
            "target_lang",
            options.str_opt("target_lang").unwrap_or("EN-US").to_string(),
        ),
    ];
    // Option keys double as the wire field names here.
    for key in [
        "source_lang",
        "split_sentences",
        "formality",
        "glossary_id",
        "tag_handling",
        "non_splitting_tags",
    ] {
        if let Some(value) = options.non_empty(key).and_then(Value::as_str) {
            fields.push((key, value.to_string()));
        }
    }
    if options.bool_opt("preserve_formatting").unwrap_or(false) {
        fields.push(("preserve_formatting", "1".to_string()));
    }
    if options.bool_opt("outline_detection").unwrap_or(false) {
        fields.push(("outline_detection", "1".to_string()));
    }
    fields
}

/// Extract the translation from the response envelope
pub fn extract_completion(envelope: &Value) -> String {
    envelope["translations"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
