//! Gemini (Google Generative Language) provider
//!
//! `POST {base}/v1beta/models/{model}:generateContent?key={k}` — the API key
//! authenticates via the query string, so every error that can echo the URL
//! is masked. Streaming uses `:streamGenerateContent`, whose body is one
//! top-level JSON array delivered without any framing; objects are recovered
//! by brace matching.

pub mod client;
pub mod streaming;
pub mod transformers;

pub use client::GeminiClient;

use serde_json::{Value, json};

/// Built-in option defaults, lowest layer of every merged options map.
/// Generation parameters live in the nested `generationConfig` sub-map,
/// exactly as the wire wants them.
pub fn defaults() -> Value {
    json!({
        "baseUrl": "https://generativelanguage.googleapis.com",
        "model": "gemini-2.5-flash",
        "generationConfig": {
            "temperature": 0.9,
            "topP": 0.95,
            "topK": 40,
            "candidateCount": 1,
            "maxOutputTokens": 1024,
            "stopSequences": [],
        },
        "chunkSize": 50,
        "maxRetries": 5,
        "fallbackModels": "gemini-2.5-flash,gemini-2.0-flash,gemini-1.5-flash",
    })
}
