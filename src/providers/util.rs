use anyhow::Error;
use reqwest::{Response, StatusCode};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// How many times a feed request is repeated and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first one.
    pub retries: usize,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            retries: 3,
            delay: Duration::from_millis(500),
        }
    }
}

fn is_transient(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

/// Sends the request built by `send` until a response is worth keeping.
///
/// Connection failures and 5xx or 429 responses are retried. Any other
/// response, 4xx included, is returned at once for the caller to judge. Once
/// the retries run out the last response or error is handed back as is.
pub async fn with_retry<F, Fut>(mut send: F, policy: RetryPolicy) -> Result<Response, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Response, reqwest::Error>>,
{
    let mut attempt = 1;
    loop {
        let reason = match send().await {
            Ok(response) if !is_transient(response.status()) => return Ok(response),
            Ok(response) if attempt > policy.retries => return Ok(response),
            Err(err) if err.is_builder() || attempt > policy.retries => return Err(err.into()),
            Ok(response) => format!("HTTP {}", response.status()),
            Err(err) => err.to_string(),
        };
        debug!(
            "Attempt {}/{} failed: {}. Retrying...",
            attempt, policy.retries, reason
        );
        attempt += 1;
        tokio::time::sleep(policy.delay).await;
    }
}
