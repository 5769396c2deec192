//! Google Translate HTTP client

use super::transformers;
use crate::error::ProviderError;
use crate::options::RequestOptions;
use crate::stream::TextStream;
use crate::traits::GenerationCapability;
use crate::utils::http::check_status;
use crate::utils::masking::mask_error;
use crate::utils::streaming::StreamFactory;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com";

pub struct GoogleTranslateClient {
    http_client: reqwest::Client,
}

impl GoogleTranslateClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    fn request(&self, prompt: &str, options: &RequestOptions) -> reqwest::RequestBuilder {
        let base = options
            .base_url()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');
        let url = format!(
            "{base}/language/translate/v2?key={key}",
            key = urlencoding::encode(options.api_key()),
        );
        let body = transformers::request_body(prompt, options);
        let mut request = self.http_client.post(url).json(&body);
        if let Some(timeout) = options.timeout() {
            request = request.timeout(timeout);
        }
        request
    }
}

#[async_trait]
impl GenerationCapability for GoogleTranslateClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &RequestOptions,
    ) -> Result<String, ProviderError> {
        let key = options.api_key();
        let response = self
            .request(prompt, options)
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

    /// No native streaming: translate fully, then re-chunk
    async fn generate_stream(
        &self,
        prompt: &str,
        options: &RequestOptions,
    ) -> Result<TextStream, ProviderError> {
        let text = self.generate(prompt, options).await?;
        Ok(StreamFactory::rechunk(&text, options.chunk_size()))
    }
}
