//! Ollama provider
//!
//! `POST {endPoint}/api/generate` against a self-hosted instance; no auth.
//! Streams as newline-delimited JSON with the text in each line's
//! `response` field. The default request timeout is generous because local
//! models cold-start slowly.

pub mod client;
pub mod streaming;
pub mod transformers;

pub use client::OllamaClient;

use serde_json::{Value, json};

/// Built-in option defaults, lowest layer of every merged options map
pub fn defaults() -> Value {
    json!({
        "endPoint": "http://ollama:11434",
        "model": "llama3",
        "temperature": 0.8,
        "topP": 0.9,
        "numPredict": 1024,
        "stop": [],
        "format": "",
        "system": "",
        "timeout": 300,
        "chunkSize": 50,
        "maxRetries": 5,
        "fallbackModels": "llama3,llama2,llama1",
    })
}
