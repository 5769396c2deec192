//! OpenAI provider
//!
//! `POST {base}/v1/responses` with bearer auth. Streams as data-only SSE
//! terminated by the `[DONE]` sentinel.

pub mod client;
pub mod streaming;
pub mod transformers;

pub use client::OpenAiClient;

use serde_json::{Value, json};

/// Built-in option defaults, lowest layer of every merged options map
pub fn defaults() -> Value {
    json!({
        "baseUrl": "https://api.openai.com",
        "model": "gpt-4o",
        "temperature": 1.0,
        "topP": 1.0,
        "maxOutputTokens": 1024,
        "stop": [],
        "chunkSize": 50,
        "maxRetries": 5,
        "fallbackModels": "gpt-4o,gpt-4o-mini,gpt-3.5-turbo",
    })
}
