//! Google Translate provider
//!
//! `POST {base}/language/translate/v2?key={k}` — query-string key auth like
//! Gemini, masked the same way. The API has no streaming; the streaming
//! contract is satisfied by re-chunking the finished translation.

pub mod client;
pub mod transformers;

pub use client::GoogleTranslateClient;

use serde_json::{Value, json};

/// Built-in option defaults, lowest layer of every merged options map
pub fn defaults() -> Value {
    json!({
        "baseUrl": "https://translation.googleapis.com",
        "targetLang": "en",
        "sourceLang": "",
        "format": "html",
        "model": "",
        "cid": "",
        "chunkSize": 50,
        "maxRetries": 5,
        "fallbackModels": "",
    })
}
