//! Provider adapters
//!
//! One module per backend, each owning its full wire protocol. The shape is
//! uniform: `transformers` holds the pure request/response mappings,
//! `client` the HTTP plumbing behind [`GenerationCapability`], and
//! `streaming` the wire-format converter where the backend streams
//! natively.
//!
//! [`GenerationCapability`]: crate::traits::GenerationCapability

pub mod claude;
pub mod cohere;
pub mod deepl;
pub mod gemini;
pub mod google_translate;
pub mod mistral;
pub mod ollama;
pub mod openai;
