//! Mistral provider
//!
//! `POST {base}/v1/chat/completions` with bearer auth. Streams as data-only
//! SSE terminated by the `[DONE]` sentinel.

pub mod client;
pub mod streaming;
pub mod transformers;

pub use client::MistralClient;

use serde_json::{Value, json};

/// Built-in option defaults, lowest layer of every merged options map
pub fn defaults() -> Value {
    json!({
        "baseUrl": "https://api.mistral.ai",
        "model": "mistral-large-latest",
        "temperature": 0.7,
        "topP": 1.0,
        "maxTokens": 1024,
        "randomSeed": 0,
        "safePrompt": false,
        "stop": [],
        "chunkSize": 50,
        "maxRetries": 5,
        "fallbackModels": "mistral-large-latest,mistral-small-latest",
    })
}
