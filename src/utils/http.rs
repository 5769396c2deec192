//! HTTP response helpers shared by the provider clients

use crate::error::ProviderError;

/// Pass a successful response through, and turn any other status into an
/// [`ProviderError::Api`] carrying the numeric code and the response body.
/// The body is additionally parsed as JSON when the provider returned a
/// structured error document.
pub async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let details = serde_json::from_str(&body).ok();
    Err(ProviderError::Api {
        status: status.as_u16(),
        message: body,
        details,
    })
}
