//! Retry with exponential back-off and jitter for the chat client.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries on
//! transient errors (429, network failures, 5xx). Everything else is
//! returned on the first failure.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::error::LlmError;

const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - [`LlmError::RateLimited`]: the provider asked us to slow down.
/// - Network-level failures: timeout, connection reset.
/// - HTTP 5xx responses.
///
/// **Not retriable:** unexpected statuses (bad key, bad request), malformed
/// or empty bodies, and configuration errors.
pub(crate) fn is_retriable(err: &LlmError) -> bool {
    match err {
        LlmError::RateLimited { .. } => true,
        LlmError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        LlmError::UnexpectedStatus { .. }
        | LlmError::Deserialize { .. }
        | LlmError::EmptyResponse
        | LlmError::MissingApiKey
        | LlmError::InvalidBaseUrl { .. } => false,
    }
}

/// Seconds from a numeric `Retry-After` header. HTTP-date values are ignored.
pub(crate) fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

/// Minimum wait a 429 asked for, capped at 60 s. Zero for other errors.
fn retry_after_floor_ms(err: &LlmError) -> u64 {
    match err {
        LlmError::RateLimited {
            retry_after_secs: Some(secs),
        } => secs.saturating_mul(1_000).min(MAX_DELAY_MS),
        _ => 0,
    }
}

/// Back-off before retry number `attempt` (1-based), before jitter.
///
/// A server-provided `Retry-After` raises the delay but never lowers it.
/// Both are capped at 60 s.
pub(crate) fn backoff_delay_ms(attempt: u32, backoff_base_ms: u64, err: &LlmError) -> u64 {
    let computed = backoff_base_ms.saturating_mul(1u64 << attempt.saturating_sub(1).min(10));
    computed.min(MAX_DELAY_MS).max(retry_after_floor_ms(err))
}

/// Calls `operation` until it succeeds, fails permanently, or has been
/// retried `max_retries` times.
///
/// With `backoff_base_ms = 1_000` the waits are roughly 1 s, 2 s, 4 s, ...
/// (each scaled by a random factor in `0.75..1.25`), never above 60 s and
/// never below a 429's `Retry-After`.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, LlmError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let base = backoff_delay_ms(attempt, backoff_base_ms, &err);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let jittered = (base as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                let delay_ms = jittered.min(MAX_DELAY_MS).max(retry_after_floor_ms(&err));
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "chat completion failed transiently, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
