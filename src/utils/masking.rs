//! API-key masking
//!
//! Keys must never reach a log sink or an error payload in the clear, in
//! structured fields, in URLs (two providers authenticate via a `?key=`
//! query parameter) or in free-text transport errors that echo the
//! request URL.

use crate::error::ProviderError;
use regex::Regex;

/// Mask a key for display: first four and last four characters survive,
/// the middle is replaced by asterisks. Keys of eight characters or fewer
/// are masked entirely.
pub fn mask_api_key(api_key: &str) -> String {
    let len = api_key.chars().count();
    if len <= 8 {
        return "*".repeat(len);
    }
    let first: String = api_key.chars().take(4).collect();
    let last: String = api_key.chars().skip(len - 4).collect();
    format!("{first}{}{last}", "*".repeat(len - 8))
}

/// Mask every occurrence of `api_key` in `text`: as a `key=` query
/// parameter, percent-encoded inside a URL, or as a bare substring.
pub fn mask_secret(text: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return text.to_string();
    }
    let masked = mask_api_key(api_key);

    let mut out = match Regex::new(&format!(r"([?&]key=){}", regex::escape(api_key))) {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                format!("{}{}", &caps[1], masked)
            })
            .into_owned(),
        // An unbuildable pattern must not stop masking; the plain
        // replacements below still run.
        Err(_) => text.to_string(),
    };

    let encoded = urlencoding::encode(api_key);
    if encoded != api_key {
        out = out.replace(encoded.as_ref(), &masked);
    }
    out.replace(api_key, &masked)
}

/// Rewrite every text payload of an error through [`mask_secret`]. Used by
/// the adapters whose key travels in the request URL, where transport
/// errors echo it back.
pub fn mask_error(err: ProviderError, api_key: &str) -> ProviderError {
    if api_key.is_empty() {
        return err;
    }
    match err {
        ProviderError::Api {
            status,
            message,
            details,
        } => ProviderError::Api {
            status,
            message: mask_secret(&message, api_key),
            details,
        },
        ProviderError::Transport(m) => ProviderError::Transport(mask_secret(&m, api_key)),
        ProviderError::Timeout(m) => ProviderError::Timeout(mask_secret(&m, api_key)),
        ProviderError::Parse(m) => ProviderError::Parse(mask_secret(&m, api_key)),
        ProviderError::Stream(m) => ProviderError::Stream(mask_secret(&m, api_key)),
        ProviderError::InvalidParameter(m) => {
            ProviderError::InvalidParameter(mask_secret(&m, api_key))
        }
        ProviderError::Configuration(m) => ProviderError::Configuration(mask_secret(&m, api_key)),
        ProviderError::Unavailable { provider, source } => ProviderError::Unavailable {
            provider,
            source: Box::new(mask_error(*source, api_key)),
        },
    }
}
