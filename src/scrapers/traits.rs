use crate::models::TrackedProduct;
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can read the current price of a product page
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Read the price currently shown for the product
    async fn read_price(&self, product: &TrackedProduct) -> Result<u64>;

    /// Get the name of the price source
    fn source_name(&self) -> &'static str;
}
