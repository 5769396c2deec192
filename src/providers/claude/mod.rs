//! Claude (Anthropic) provider
//!
//! `POST {base}/v1/messages` with `x-api-key` / `anthropic-version` headers.
//! Streams as SSE with named events; only `content_block_delta` events carry
//! text.

pub mod client;
pub mod streaming;
pub mod transformers;

pub use client::ClaudeClient;

use serde_json::{Value, json};

/// Built-in option defaults, lowest layer of every merged options map
pub fn defaults() -> Value {
    json!({
        "baseUrl": "https://api.anthropic.com",
        "apiVersion": "2023-06-01",
        "model": "claude-3-opus-20240229",
        "maxTokens": 1024,
        "system": "",
        "stopSequences": [],
        "temperature": 1.0,
        "topP": 1.0,
        "topK": 5,
        "chunkSize": 50,
        "maxRetries": 5,
        "fallbackModels": "claude-3-opus-20240229,claude-2,claude-instant-100k",
    })
}
