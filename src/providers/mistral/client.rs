//! Mistral HTTP client

use super::streaming::MistralEventConverter;
use super::transformers;
use crate::error::ProviderError;
use crate::options::RequestOptions;
use crate::stream::TextStream;
use crate::traits::GenerationCapability;
use crate::utils::http::check_status;
use crate::utils::streaming::StreamFactory;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://api.mistral.ai";

pub struct MistralClient {
    http_client: reqwest::Client,
}

impl MistralClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    fn request(
        &self,
        prompt: &str,
        options: &RequestOptions,
        stream: bool,
    ) -> reqwest::RequestBuilder {
        let base = options
            .base_url()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');
        let body = transformers::request_body(prompt, options, stream);
        let mut request = self
            .http_client
            .post(format!("{base}/v1/chat/completions"))
            .bearer_auth(options.api_key())
            .json(&body);
        if let Some(timeout) = options.timeout() {
            request = request.timeout(timeout);
        }
        request
    }
}

#[async_trait]
impl GenerationCapability for MistralClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &RequestOptions,
    ) -> Result<String, ProviderError> {
        let response = self
            .request(prompt, options, false)
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;
        let response = check_status(response).await?;
        let envelope: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("invalid response envelope: {e}")))?;
        Ok(transformers::extract_completion(&envelope))
    }

    async fn generate_stream(
        &self,
        prompt: &str,
        options: &RequestOptions,
    ) -> Result<TextStream, ProviderError> {
        StreamFactory::sse_stream(self.request(prompt, options, true), MistralEventConverter).await
    }
}
