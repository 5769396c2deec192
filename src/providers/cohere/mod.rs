//! Cohere provider
//!
//! `POST {base}/v1/chat` with bearer auth. Streams as newline-delimited
//! JSON, one event object per line, discriminated by `event_type`.

pub mod client;
pub mod streaming;
pub mod transformers;

pub use client::CohereClient;

use serde_json::{Value, json};

/// Built-in option defaults, lowest layer of every merged options map
pub fn defaults() -> Value {
    json!({
        "baseUrl": "https://api.cohere.ai",
        "model": "command-r-plus",
        "maxTokens": 1024,
        "temperature": 0.3,
        "p": 0.75,
        "k": 0,
        "frequencyPenalty": 0.0,
        "presencePenalty": 0.0,
        "stopSequences": [],
        "preamble": "",
        "chunkSize": 50,
        "maxRetries": 5,
        "fallbackModels": "command-r-plus,command-xlarge-nightly,command-xlarge-20221108",
    })
}
