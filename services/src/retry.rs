//! Retry-with-backoff helper applied to remote calls in the pipeline.
//!
//! Policy: up to [`RETRY_ATTEMPTS`] attempts total; the wait before retry
//! `i` is `BASE_DELAY_MS * 2^(i-1)` (1 s, then 2 s). The final failed
//! attempt's error is returned to the caller unchanged.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Total number of attempts, including the first one.
pub const RETRY_ATTEMPTS: usize = 3;

const BASE_DELAY_MS: u64 = 1_000;

/// Runs `op`, retrying transient failures with exponential backoff.
///
/// `label` identifies the operation in logs. Every failure short of the
/// attempt cap is logged at `warn`; the last failure propagates.
///
/// # Errors
/// Returns the error from the final attempt once the cap is reached.
pub async fn with_retry<T, E, F, Fut>(label: &str, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0usize;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                warn!("{label}: attempt {attempt}/{RETRY_ATTEMPTS} failed: {err}");
                if attempt >= RETRY_ATTEMPTS {
                    return Err(err);
                }
                let delay = Duration::from_millis(BASE_DELAY_MS << (attempt - 1));
                tokio::time::sleep(delay).await;
            }
        }
    }
}
