use crate::core::feed::{PriceFeedProvider, PriceRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a price list saved in the same JSON shape the HTTP feed serves.
pub struct FileFeedProvider {
    path: PathBuf,
}

impl FileFeedProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileFeedProvider {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl PriceFeedProvider for FileFeedProvider {
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>> {
        debug!("Reading price list from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read price list: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse price list: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_price_list_from_disk() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("prices.json");
        fs::write(
            &path,
            r#"[{"currency":"ETH","price":1645.93},{"currency":"USD","price":1}]"#,
        )?;

        let records = FileFeedProvider::new(&path).fetch_prices().await?;
        assert_eq!(records, vec![PriceRecord::new("ETH", 1645.93), PriceRecord::new("USD", 1.0)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let provider = FileFeedProvider::new("/no/such/prices.json");
        let err = provider.fetch_prices().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read price list"));
    }
}
