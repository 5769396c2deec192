//! Transient-failure recovery
//!
//! Wraps one adapter invocation with transient-status detection, bounded
//! retry, and model substitution through the fallback chain. The budget
//! spans the whole logical request: every fallback attempt draws from the
//! same counter, so a chain in which every model fails transiently still
//! terminates.
//!
//! Only HTTP failures whose status sits in the provider's transient set are
//! recovered. Transport failures carry no status and fail immediately;
//! everything terminal is wrapped into [`ProviderError::Unavailable`] with
//! the cause preserved.

use crate::error::ProviderError;
use crate::fallback::FallbackChain;
use crate::options::RequestOptions;
use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

/// Retry budget for one logical request, spanning all fallback attempts
#[derive(Debug, Clone, Copy)]
pub struct RetryState {
    count: u32,
    max: u32,
}

impl RetryState {
    pub fn new(max: u32) -> Self {
        Self { count: 0, max }
    }

    pub fn exhausted(&self) -> bool {
        self.count >= self.max
    }

    pub fn record_attempt(&mut self) {
        self.count += 1;
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// How a provider recovers from a transient status
#[derive(Debug, Clone, Copy)]
pub enum RecoveryPolicy {
    /// Substitute the model through the fallback chain and re-issue
    ModelFallback { transient: &'static [u16] },
    /// Sleep, then re-issue with the same model — the single-model
    /// translation backends, where substitution has nothing to substitute
    DelayedRetry {
        transient: &'static [u16],
        delay: Duration,
    },
}

impl RecoveryPolicy {
    pub fn is_transient(&self, status: u16) -> bool {
        match self {
            Self::ModelFallback { transient } | Self::DelayedRetry { transient, .. } => {
                transient.contains(&status)
            }
        }
    }
}

/// Drive `attempt` until success, a non-transient failure, or an exhausted
/// budget. The closure receives a fresh copy of the (possibly substituted)
/// options per attempt.
pub async fn run_with_recovery<T, F, Fut>(
    provider: &str,
    policy: RecoveryPolicy,
    chain: &FallbackChain,
    options: &mut RequestOptions,
    mut state: RetryState,
    mut attempt: F,
) -> Result<T, ProviderError>
where
    F: FnMut(RequestOptions) -> Fut,
    Fut: Future<Output = Result<T, ProviderError>> + Send,
    T: Send,
{
    loop {
        let err = match attempt(options.clone()).await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let transient = err
            .status_code()
            .is_some_and(|status| policy.is_transient(status));
        if !transient || state.exhausted() {
            error!(
                provider,
                attempts = state.count() + 1,
                error = %err,
                options = %options.masked(),
                "request failed terminally"
            );
            return Err(ProviderError::unavailable(provider, err));
        }
        state.record_attempt();

        match policy {
            RecoveryPolicy::ModelFallback { .. } => {
                let substitute = chain.next(options.model()).map(str::to_string);
                match substitute {
                    Some(next) => {
                        warn!(
                            provider,
                            status = err.status_code(),
                            from = options.model(),
                            to = %next,
                            retry = state.count(),
                            "transient failure, substituting fallback model"
                        );
                        options.set_model(&next);
                    }
                    None => {
                        // Chain too short to substitute; the bounded retry
                        // with the same model still applies.
                        warn!(
                            provider,
                            status = err.status_code(),
                            model = options.model(),
                            retry = state.count(),
                            "transient failure, retrying with the same model"
                        );
                    }
                }
            }
            RecoveryPolicy::DelayedRetry { delay, .. } => {
                warn!(
                    provider,
                    status = err.status_code(),
                    delay_secs = delay.as_secs(),
                    retry = state.count(),
                    "transient failure, delaying before retry"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
