pub mod browser;
pub mod http;
pub mod price;
pub mod traits;

pub use browser::BrowserPriceSource;
pub use http::HttpPriceSource;
pub use traits::PriceSource;

use crate::config::{SourceKind, TrackerConfig};
use anyhow::Result;

/// Build the price source selected in the config
pub fn from_config(config: &TrackerConfig) -> Result<Box<dyn PriceSource>> {
    Ok(match config.source {
        SourceKind::Browser => Box::new(BrowserPriceSource::new(config)?),
        SourceKind::Http => Box::new(HttpPriceSource::new(config)?),
    })
}
