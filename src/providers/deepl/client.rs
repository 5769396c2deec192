//! DeepL HTTP client

use super::transformers;
use crate::error::ProviderError;
use crate::options::RequestOptions;
use crate::stream::TextStream;
use crate::traits::GenerationCapability;
use crate::utils::http::check_status;
use crate::utils::streaming::StreamFactory;
use async_trait::async_trait;

const FREE_HOST: &str = "https://api-free.deepl.com";
const PAID_HOST: &str = "https://api.deepl.com";

pub struct DeepLClient {
    http_client: reqwest::Client,
}

impl DeepLClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Free-tier keys must hit `api-free.deepl.com`; an explicit `baseUrl`
    /// (tests, proxies) wins over the plan switch.
    fn host(options: &RequestOptions) -> &str {
        if let Some(base) = options.base_url() {
            return base.trim_end_matches('/');
        }
        match options.str_opt("apiVersion") {
            Some("free") | None => FREE_HOST,
            Some(_) => PAID_HOST,
        }
    }

    fn request(&self, prompt: &str, options: &RequestOptions) -> reqwest::RequestBuilder {
        let url = format!("{}/v2/translate", Self::host(options));
        let fields = transformers::form_fields(prompt, options);
        let mut request = self.http_client.post(url).form(&fields);
        if let Some(timeout) = options.timeout() {
            request = request.timeout(timeout);
        }
        request
    }
}

#[async_trait]
impl GenerationCapability for DeepLClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &RequestOptions,
    ) -> Result<String, ProviderError> {
        let response = self
            .request(prompt, options)
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
