//! Stream type shared by all providers
//!
//! Callers consume one shape regardless of the backend's wire format: a
//! finite, pull-based sequence of text fragments in arrival order. A failed
//! stream terminates with a single `Err` item; nothing is yielded after it.

use crate::error::ProviderError;
use futures::Stream;
use futures_util::StreamExt;
use std::pin::Pin;

/// Boxed fragment stream returned by `stream_process` and every adapter
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, ProviderError>> + Send>>;

/// Drain a stream into one string, stopping at the first error
pub async fn collect_text(mut stream: TextStream) -> Result<String, ProviderError> {
    let mut out = String::new();
    while let Some(fragment) = stream.next().await {
        out.push_str(&fragment?);
    }
    Ok(out)
}
