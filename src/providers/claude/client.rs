//! Claude HTTP client

use super::streaming::ClaudeEventConverter;
use super::transformers;
use crate::error::ProviderError;
use crate::options::RequestOptions;
use crate::stream::TextStream;
use crate::traits::GenerationCapability;
use crate::utils::http::check_status;
use crate::utils::streaming::StreamFactory;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_API_VERSION: &str = "2023-06-01";

pub struct ClaudeClient {
    http_client: reqwest::Client,
}

impl ClaudeClient {
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
            .post(format!("{base}/v1/messages"))
            .header("x-api-key", options.api_key())
            .header(
                "anthropic-version",
                options.str_opt("apiVersion").unwrap_or(DEFAULT_API_VERSION),
            )
            .json(&body);
        if let Some(timeout) = options.timeout() {
            request = request.timeout(timeout);
        }
        request
    }
}

#[async_trait]
impl GenerationCapability for ClaudeClient {
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
        StreamFactory::sse_stream(self.request(prompt, options, true), ClaudeEventConverter).await
    }
}
