use crate::core::feed::{PriceFeedProvider, PriceRecord};
use crate::providers::util::{RetryPolicy, with_retry};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Reads the published `prices.json` price list over HTTP.
pub struct SwitcheoFeedProvider {
    base_url: String,
    retry: RetryPolicy,
}

impl SwitcheoFeedProvider {
    pub fn new(base_url: &str) -> Self {
        SwitcheoFeedProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[async_trait]
impl PriceFeedProvider for SwitcheoFeedProvider {
    #[instrument(name = "SwitcheoPriceFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>> {
        let url = format!("{}/prices.json", self.base_url);
        debug!("Requesting price list from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("tokswap/0.1")
            .build()?;
        let response = with_retry(|| client.get(&url).send(), self.retry)
            .await
            .with_context(|| format!("Failed to request price list from {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP error: {} for price list from {}", status, url));
        }

        let response_text = response
            .text()
            .await
            .with_context(|| format!("Failed to read price list body from {url}"))?;

        if response_text.trim().is_empty() {
            return Err(anyhow!("Received empty price list from {} ({})", url, status));
        }

        let records: Vec<PriceRecord> = serde_json::from_str(&response_text).with_context(|| {
            format!("Failed to parse price list from {url} ({status}). Response: '{response_text}'")
        })?;

        debug!(count = records.len(), "Fetched price records");
        Ok(records)
    }
}
