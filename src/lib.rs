//! # Omnitext — a unified streaming client for generative AI and machine translation APIs
//!
//! Omnitext fronts eight text-generation and translation backends — Claude,
//! OpenAI, Cohere, Mistral, Gemini, Google Translate, DeepL and a
//! self-hosted Ollama — behind two uniform entry points. Request shapes,
//! response envelopes and four different streaming wire formats are
//! normalized into one contract, and transient backend failures are
//! recovered transparently through per-provider model fallback chains.
//!
#![deny(unsafe_code)]
//!
//! ## Features
//!
//! - **One contract**: `process` returns the full text, `stream_process` a
//!   pull-based fragment stream, regardless of the backend.
//! - **Normalized options**: one flat options map with per-provider
//!   defaults; callers override only what they mean to.
//! - **Wire fidelity**: each adapter speaks its provider's published API —
//!   SSE (named and data-only), NDJSON, unframed JSON array streaming, and
//!   plain request/response with artificial re-chunking.
//! - **Failover**: transient statuses substitute the model through a
//!   configurable cyclic fallback chain, bounded by a per-request budget;
//!   translation backends sleep and retry instead.
//! - **Key hygiene**: API keys are masked in every log line and error
//!   message, including keys embedded in URLs.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use omnitext::{Dispatcher, DispatcherConfig};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DispatcherConfig::default()
//!         .provider("claude", json!({"apiKey": "your-api-key"}));
//!     let dispatcher = Dispatcher::new(config)?;
//!
//!     let text = dispatcher
//!         .process("claude", "Say hello.", &json!({"maxTokens": 64}))
//!         .await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use omnitext::{Dispatcher, DispatcherConfig};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DispatcherConfig::default()
//!         .provider("ollama", json!({"endPoint": "http://localhost:11434"}));
//!     let dispatcher = Dispatcher::new(config)?;
//!
//!     let mut stream = dispatcher
//!         .stream_process("ollama", "Tell me a story.", &json!({}))
//!         .await?;
//!     while let Some(fragment) = stream.next().await {
//!         print!("{}", fragment?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod dispatcher;
pub mod error;
pub mod fallback;
pub mod options;
pub mod providers;
pub mod registry;
pub mod retry;
pub mod stream;
pub mod telemetry;
pub mod traits;
pub mod utils;

pub use dispatcher::{Dispatcher, DispatcherConfig};
pub use error::{ErrorCategory, ProviderError};
pub use fallback::FallbackChain;
pub use options::RequestOptions;
pub use registry::ProviderId;
pub use stream::{TextStream, collect_text};
pub use traits::GenerationCapability;

/// Common imports for downstream code
pub mod prelude {
    pub use crate::dispatcher::{Dispatcher, DispatcherConfig};
    pub use crate::error::ProviderError;
    pub use crate::stream::{TextStream, collect_text};
    pub use futures_util::StreamExt;
}
