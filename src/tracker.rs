use crate::error::{Result, TrackerError};
use crate::ledger::Ledger;
use crate::models::{Observation, TrackedProduct};
use crate::scrapers::PriceSource;
use chrono::{Local, NaiveDateTime, Timelike};
use tracing::{info, warn};

/// What a scrape run produced
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    pub recorded: Vec<Observation>,
    /// One `TrackerError::Reading` per product that could not be read
    pub failures: Vec<TrackerError>,
}

/// Local wall-clock time truncated to whole seconds
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Read every product in turn and append the successful readings to the ledger
///
/// A failed product is logged and skipped; the rest of the batch still runs.
pub async fn scrape_all(
    source: &dyn PriceSource,
    products: &[TrackedProduct],
    store: &str,
    ledger: &Ledger,
) -> Result<ScrapeOutcome> {
    let mut outcome = ScrapeOutcome::default();

    for product in products {
        match source.read_price(product).await {
            Ok(price) => {
                info!("{}: {} via {}", product.name, price, source.source_name());
                outcome
                    .recorded
                    .push(Observation::new(now(), store, &product.name, price, &product.url));
            }
            Err(e) => {
                warn!("Skipping {}: {:#}", product.name, e);
                outcome.failures.push(TrackerError::Reading {
                    product: product.name.clone(),
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    ledger.append(&outcome.recorded)?;
    Ok(outcome)
}
