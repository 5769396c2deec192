//! Error types for the gateway
//!
//! One taxonomy for everything that can go wrong between "caller asked for
//! text" and "a backend produced it": HTTP failures with a response, pure
//! transport failures, undecodable envelopes, broken stream framing, and
//! local configuration mistakes. The retry controller keys exclusively off
//! `status_code()`, so an HTTP error must never be collapsed into a string
//! before the controller has seen it.

use thiserror::Error;

/// Unified error type for all provider operations
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP error response from the backend (status code is preserved for
    /// transient-failure classification)
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// No HTTP response at all: DNS, TLS, connection refused
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request deadline exceeded
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Response body or stream payload could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Wire framing broke down mid-stream
    #[error("Stream error: {0}")]
    Stream(String),

    /// Locally detected invalid input (header values, malformed URLs)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unknown provider identifier or unusable gateway configuration.
    /// Fatal: never retried and never converted into the user-visible
    /// unavailability payload.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Terminal failure after the retry/fallback budget is spent. The
    /// display string is the uniform payload callers may show to users;
    /// the source keeps the underlying cause distinguishable.
    #[error("{provider} - service not available")]
    Unavailable {
        provider: String,
        #[source]
        source: Box<ProviderError>,
    },
}

/// Coarse error classification, mainly for log fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Client,
    Server,
    Network,
    Parsing,
    Validation,
    Configuration,
    Unavailable,
}

impl ProviderError {
    /// Construct an API error without details
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// HTTP status code, when the failure carries one
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unavailable { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Coarse category for logging and presentation
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                400..=499 => ErrorCategory::Client,
                _ => ErrorCategory::Server,
            },
            Self::Transport(_) | Self::Timeout(_) => ErrorCategory::Network,
            Self::Parse(_) | Self::Stream(_) => ErrorCategory::Parsing,
            Self::InvalidParameter(_) => ErrorCategory::Validation,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Unavailable { .. } => ErrorCategory::Unavailable,
        }
    }

    /// Classify a reqwest failure. Only errors that carry no HTTP response
    /// end up here; status-bearing responses are mapped to `Api` at the
    /// call sites, where the body is still readable.
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_connect() {
            Self::Transport(format!("connection failed: {e}"))
        } else if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }

    /// Wrap a terminal failure into the uniform unavailability payload
    pub fn unavailable(provider: impl Into<String>, source: ProviderError) -> Self {
        Self::Unavailable {
            provider: provider.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_survives_unavailable_wrapping() {
        let err = ProviderError::unavailable("Claude", ProviderError::api_error(429, "slow down"));
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(err.category(), ErrorCategory::Unavailable);
    }

    #[test]
    fn unavailable_display_is_the_uniform_payload() {
        let err = ProviderError::unavailable("Gemini", ProviderError::api_error(500, "boom"));
        assert_eq!(err.to_string(), "Gemini - service not available");
    }

    #[test]
    fn api_error_categories() {
        assert_eq!(
            ProviderError::api_error(401, "no").category(),
            ErrorCategory::Authentication
        );
        assert_eq!(
            ProviderError::api_error(429, "rate").category(),
            ErrorCategory::RateLimit
        );
        assert_eq!(
            ProviderError::api_error(404, "gone").category(),
            ErrorCategory::Client
        );
        assert_eq!(
            ProviderError::api_error(503, "down").category(),
            ErrorCategory::Server
        );
    }

    #[test]
    fn transport_errors_have_no_status() {
        assert_eq!(
            ProviderError::Transport("refused".into()).status_code(),
            None
        );
    }
}
