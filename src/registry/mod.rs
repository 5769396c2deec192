//! Provider registry
//!
//! The static table wiring identifier strings to everything the dispatcher
//! needs per backend: built-in option defaults, the recovery policy with
//! its transient status set, and the client factory. Unknown identifiers
//! fail fast as configuration errors; they are never folded into the
//! user-visible unavailability payload.

use crate::error::ProviderError;
use crate::providers::{claude, cohere, deepl, gemini, google_translate, mistral, ollama, openai};
use crate::retry::RecoveryPolicy;
use crate::traits::GenerationCapability;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// The delayed-retry pause for the single-model translation backends
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Identifier of one configured backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Claude,
    OpenAi,
    Cohere,
    Mistral,
    Gemini,
    GoogleTranslate,
    DeepL,
    Ollama,
}

impl ProviderId {
    pub const ALL: [ProviderId; 8] = [
        ProviderId::Claude,
        ProviderId::OpenAi,
        ProviderId::Cohere,
        ProviderId::Mistral,
        ProviderId::Gemini,
        ProviderId::GoogleTranslate,
        ProviderId::DeepL,
        ProviderId::Ollama,
    ];

    /// Parse a configured identifier string
    pub fn parse(identifier: &str) -> Result<Self, ProviderError> {
        match identifier {
            "claude" => Ok(Self::Claude),
            "openai" => Ok(Self::OpenAi),
            "cohere" => Ok(Self::Cohere),
            "mistral" => Ok(Self::Mistral),
            "gemini" => Ok(Self::Gemini),
            "googletranslate" => Ok(Self::GoogleTranslate),
            "deepl" => Ok(Self::DeepL),
            "ollama" => Ok(Self::Ollama),
            other => Err(ProviderError::Configuration(format!(
                "no provider registered for identifier \"{other}\""
            ))),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::OpenAi => "openai",
            Self::Cohere => "cohere",
            Self::Mistral => "mistral",
            Self::Gemini => "gemini",
            Self::GoogleTranslate => "googletranslate",
            Self::DeepL => "deepl",
            Self::Ollama => "ollama",
        }
    }

    /// Human-readable name used in log fields and failure payloads
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Claude => "Claude",
            Self::OpenAi => "OpenAI",
            Self::Cohere => "Cohere",
            Self::Mistral => "Mistral",
            Self::Gemini => "Gemini",
            Self::GoogleTranslate => "Google Translate",
            Self::DeepL => "DeepL",
            Self::Ollama => "Ollama",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the dispatcher needs to drive one backend
#[derive(Debug)]
pub struct ProviderRecord {
    pub id: ProviderId,
    pub defaults: fn() -> Value,
    pub policy: RecoveryPolicy,
    factory: fn(reqwest::Client) -> Arc<dyn GenerationCapability>,
}

impl ProviderRecord {
    pub fn build_client(&self, http_client: reqwest::Client) -> Arc<dyn GenerationCapability> {
        (self.factory)(http_client)
    }
}

/// The static record for one provider
pub fn record(id: ProviderId) -> ProviderRecord {
    match id {
        ProviderId::Claude => ProviderRecord {
            id,
            defaults: claude::defaults,
            policy: RecoveryPolicy::ModelFallback {
                transient: &[429, 503],
            },
            factory: |http| Arc::new(claude::ClaudeClient::new(http)),
        },
        ProviderId::OpenAi => ProviderRecord {
            id,
            defaults: openai::defaults,
            policy: RecoveryPolicy::ModelFallback { transient: &[429] },
            factory: |http| Arc::new(openai::OpenAiClient::new(http)),
        },
        ProviderId::Cohere => ProviderRecord {
            id,
            defaults: cohere::defaults,
            policy: RecoveryPolicy::ModelFallback { transient: &[429] },
            factory: |http| Arc::new(cohere::CohereClient::new(http)),
        },
        ProviderId::Mistral => ProviderRecord {
            id,
            defaults: mistral::defaults,
            policy: RecoveryPolicy::ModelFallback { transient: &[429] },
            factory: |http| Arc::new(mistral::MistralClient::new(http)),
        },
        ProviderId::Gemini => ProviderRecord {
            id,
            defaults: gemini::defaults,
            policy: RecoveryPolicy::ModelFallback {
                transient: &[429, 503],
            },
            factory: |http| Arc::new(gemini::GeminiClient::new(http)),
        },
        ProviderId::GoogleTranslate => ProviderRecord {
            id,
            defaults: google_translate::defaults,
            policy: RecoveryPolicy::DelayedRetry {
                transient: &[429, 456],
                delay: RETRY_DELAY,
            },
            factory: |http| Arc::new(google_translate::GoogleTranslateClient::new(http)),
        },
        ProviderId::DeepL => ProviderRecord {
            id,
            defaults: deepl::defaults,
            policy: RecoveryPolicy::DelayedRetry {
                transient: &[429, 456],
                delay: RETRY_DELAY,
            },
            factory: |http| Arc::new(deepl::DeepLClient::new(http)),
        },
        ProviderId::Ollama => ProviderRecord {
            id,
            defaults: ollama::defaults,
            policy: RecoveryPolicy::ModelFallback {
                transient: &[429, 503],
            },
            factory: |http| Arc::new(ollama::OllamaClient::new(http)),
        },
    }
}

/// Look up the record for a configured identifier
pub fn resolve(identifier: &str) -> Result<ProviderRecord, ProviderError> {
    ProviderId::parse(identifier).map(record)
}
