//! Price feed abstractions

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw entry of a price list, as published by the upstream feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub currency: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub price: f64,
}

impl PriceRecord {
    pub fn new(currency: &str, price: f64) -> Self {
        Self {
            currency: currency.to_string(),
            date: None,
            price,
        }
    }
}

#[async_trait]
pub trait PriceFeedProvider: Send + Sync {
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialization() {
        let json = r#"[
            {"currency":"BLUR","date":"2023-08-29T07:10:40.000Z","price":0.20811525423728813},
            {"currency":"USD","price":1}
        ]"#;
        let records: Vec<PriceRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].currency, "BLUR");
        assert_eq!(
            records[0].date.unwrap().to_rfc3339(),
            "2023-08-29T07:10:40+00:00"
        );
        assert_eq!(records[1].price, 1.0);
        assert!(records[1].date.is_none());
    }
}
