//! DeepL provider
//!
//! `POST {host}/v2/translate`, form-encoded with the key as the `auth_key`
//! field. The host is picked by plan: `api-free.deepl.com` for the free
//! tier (the default), `api.deepl.com` otherwise. No streaming; results are
//! re-chunked.
//!
//! DeepL's option keys are its own snake_case form-field names, not the
//! camelCase used elsewhere, because the options map doubles as the form
//! payload source.

pub mod client;
pub mod transformers;

pub use client::DeepLClient;

use serde_json::{Value, json};

/// Built-in option defaults, lowest layer of every merged options map
pub fn defaults() -> Value {
    json!({
        "apiVersion": "free",
        "target_lang": "EN-US",
        "source_lang": "",
        "split_sentences": "on",
        "preserve_formatting": false,
        "formality": "default",
        "glossary_id": "",
        "tag_handling": "",
        "outline_detection": false,
        "non_splitting_tags": "",
        "chunkSize": 50,
        "maxRetries": 5,
        "fallbackModels": "",
    })
}
