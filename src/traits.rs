//! Capability traits implemented by the provider clients

use crate::error::ProviderError;
use crate::options::RequestOptions;
use crate::stream::TextStream;
use async_trait::async_trait;

/// Text generation against one backend.
///
/// Implementations own the full wire protocol for their provider: request
/// construction from the merged options, authentication, envelope parsing,
/// and the streaming frame format. They never retry — transient-failure
/// recovery belongs to the controller wrapping them.
#[async_trait]
pub trait GenerationCapability: Send + Sync {
    /// Complete `prompt` and return the full response text.
    ///
    /// A missing completion path in an otherwise valid envelope yields an
    /// empty string, not an error.
    async fn generate(
        &self,
        prompt: &str,
        options: &RequestOptions,
    ) -> Result<String, ProviderError>;

    /// Complete `prompt` as a finite stream of text fragments in arrival
    /// order. Providers without native streaming fetch the full result and
    /// re-chunk it.
    async fn generate_stream(
        &self,
        prompt: &str,
        options: &RequestOptions,
    ) -> Result<TextStream, ProviderError>;
}
