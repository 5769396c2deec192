//! Dispatcher — the two uniform entry points
//!
//! `process` and `stream_process` select the adapter for a configured
//! provider identifier, assemble the effective options (built-in defaults,
//! deployment configuration, per-call overrides), and drive the retry
//! controller around the adapter call. All configuration arrives through
//! [`DispatcherConfig`]; nothing is read from ambient state.

use crate::error::ProviderError;
use crate::fallback::FallbackChain;
use crate::options::RequestOptions;
use crate::registry::{self, ProviderRecord};
use crate::retry::{self, RetryState};
use crate::stream::TextStream;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Explicit dispatcher configuration
#[derive(Debug, Default, Clone)]
pub struct DispatcherConfig {
    /// Deployment-level option overrides, keyed by provider identifier
    /// (`"claude"`, `"deepl"`, ...). Merged over the built-in defaults and
    /// under the per-call overrides.
    pub providers: HashMap<String, Value>,
    /// Shared HTTP client; a default client is built when absent
    pub http_client: Option<reqwest::Client>,
}

impl DispatcherConfig {
    pub fn provider(mut self, identifier: impl Into<String>, options: Value) -> Self {
        self.providers.insert(identifier.into(), options);
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

/// Routes generation requests to the configured backends
pub struct Dispatcher {
    http_client: reqwest::Client,
    deployment: HashMap<String, Value>,
}

impl Dispatcher {
    /// Building the shared HTTP client is the only fallible step.
    pub fn new(config: DispatcherConfig) -> Result<Self, ProviderError> {
        let http_client = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().build().map_err(|e| {
                ProviderError::Configuration(format!("failed to build HTTP client: {e}"))
            })?,
        };
        Ok(Self {
            http_client,
            deployment: config.providers,
        })
    }

    /// Complete `prompt` against `provider` and return the full text
    pub async fn process(
        &self,
        provider: &str,
        prompt: &str,
        overrides: &Value,
    ) -> Result<String, ProviderError> {
        let record = registry::resolve(provider)?;
        let mut options = self.merged_options(&record, overrides);
        let display_name = record.id.display_name();
        info!(
            provider = display_name,
            prompt_chars = prompt.chars().count(),
            options = %options.masked(),
            "dispatching generation request"
        );

        let chain = FallbackChain::from_list(options.fallback_models());
        let state = RetryState::new(options.max_retries());
        let client = record.build_client(self.http_client.clone());

        retry::run_with_recovery(
            display_name,
            record.policy,
            &chain,
            &mut options,
            state,
            |attempt_options| {
                let client = Arc::clone(&client);
                async move { client.generate(prompt, &attempt_options).await }
            },
        )
        .await
    }

    /// Complete `prompt` against `provider` as a fragment stream.
    ///
    /// Failures before the backend accepts the request (including every
    /// retried transient failure) surface here as `Err`; failures once the
    /// stream is flowing arrive as its final `Err` item.
    pub async fn stream_process(
        &self,
        provider: &str,
        prompt: &str,
        overrides: &Value,
    ) -> Result<TextStream, ProviderError> {
        let record = registry::resolve(provider)?;
        let mut options = self.merged_options(&record, overrides);
        let display_name = record.id.display_name();
        info!(
            provider = display_name,
            prompt_chars = prompt.chars().count(),
            options = %options.masked(),
            "dispatching streaming request"
        );

        let chain = FallbackChain::from_list(options.fallback_models());
        let state = RetryState::new(options.max_retries());
        let client = record.build_client(self.http_client.clone());

        retry::run_with_recovery(
            display_name,
            record.policy,
            &chain,
            &mut options,
            state,
            |attempt_options| {
                let client = Arc::clone(&client);
                async move { client.generate_stream(prompt, &attempt_options).await }
            },
        )
        .await
    }

    fn merged_options(&self, record: &ProviderRecord, overrides: &Value) -> RequestOptions {
        let deployment = self.deployment.get(record.id.as_str());
        let mut layers: Vec<&Value> = Vec::with_capacity(2);
        if let Some(options) = deployment {
            layers.push(options);
        }
        layers.push(overrides);
        RequestOptions::merged((record.defaults)(), &layers)
    }
}
