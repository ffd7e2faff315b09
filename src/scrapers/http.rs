use crate::config::TrackerConfig;
use crate::models::TrackedProduct;
use crate::scrapers::price::extract_price;
use crate::scrapers::traits::PriceSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Price reader for pages that render the price server-side
pub struct HttpPriceSource {
    client: Client,
    price_selector: String,
}

impl HttpPriceSource {
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.wait_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            price_selector: config.price_selector.clone(),
        })
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn read_price(&self, product: &TrackedProduct) -> Result<u64> {
        debug!("Fetching URL: {}", product.url);

        let response = self.client
            .get(&product.url)
            .send()
            .await
            .context("Failed to fetch product page")?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", product.url, response.status());
            anyhow::bail!("Failed to fetch product page: {}", response.status());
        }

        let html = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of HTML", html.len());

        extract_price(&html, &self.price_selector)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
