pub mod file;
pub mod switcheo;
pub mod util;

use crate::core::config::{DEFAULT_FEED_URL, ProvidersConfig};
use crate::core::feed::PriceFeedProvider;
use file::FileFeedProvider;
use switcheo::SwitcheoFeedProvider;

/// Picks the feed to load prices from. A configured file wins over HTTP.
pub fn feed_from_config(config: &ProvidersConfig) -> Box<dyn PriceFeedProvider> {
    if let Some(file) = &config.file {
        return Box::new(FileFeedProvider::new(&file.path));
    }
    let base_url = config
        .switcheo
        .as_ref()
        .map_or(DEFAULT_FEED_URL, |p| &p.base_url);
    Box::new(SwitcheoFeedProvider::new(base_url))
}
