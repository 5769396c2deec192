//! Gemini HTTP client
//!
//! The API key is a query-string parameter, so every error path that might
//! echo the request URL runs through the masking helpers before leaving
//! this module.

use super::streaming::GeminiObjectConverter;
use super::transformers;
use crate::error::ProviderError;
use crate::options::RequestOptions;
use crate::stream::TextStream;
use crate::traits::GenerationCapability;
use crate::utils::http::check_status;
use crate::utils::masking::mask_error;
use crate::utils::streaming::StreamFactory;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    fn url(&self, options: &RequestOptions, stream: bool) -> String {
        let base = options
            .base_url()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');
        let verb = if stream {
            "streamGenerateContent"
        } else {
            "generateContent"
        };
        format!(
            "{base}/v1beta/models/{model}:{verb}?key={key}",
            model = options.model(),
            key = urlencoding::encode(options.api_key()),
        )
    }

    fn request(
        &self,
        prompt: &str,
        options: &RequestOptions,
        stream: bool,
    ) -> reqwest::RequestBuilder {
        let body = transformers::request_body(prompt, options);
        let mut request = self.http_client.post(self.url(options, stream)).json(&body);
        if let Some(timeout) = options.timeout() {
            request = request.timeout(timeout);
        }
        request
    }
}

#[async_trait]
impl GenerationCapability for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &RequestOptions,
    ) -> Result<String, ProviderError> {
        let key = options.api_key();
        let response = self
            .request(prompt, options, false)
            .send()
            .await
            .map_err(|e| mask_error(ProviderError::from_reqwest(e), key))?;
        let response = check_status(response)
            .await
            .map_err(|e| mask_error(e, key))?;
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
        let key = options.api_key();
        let response = self
            .request(prompt, options, true)
            .send()
            .await
            .map_err(|e| mask_error(ProviderError::from_reqwest(e), key))?;
        let response = check_status(response)
            .await
            .map_err(|e| mask_error(e, key))?;
        Ok(StreamFactory::json_array_stream(
            response,
            GeminiObjectConverter,
        ))
    }
}
