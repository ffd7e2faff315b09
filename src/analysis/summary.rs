use crate::config::NEAR_MINIMUM_RATIO;
use crate::models::{Observation, PricePoint};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether a price moved up or down
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Drop,
    Rise,
}

/// A change between two consecutive readings of the same product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceChange {
    pub at: NaiveDateTime,
    pub from: u64,
    pub to: u64,
    /// Percent change relative to `from`; `None` when `from` is zero
    pub pct: Option<f64>,
    pub direction: Direction,
}

impl PriceChange {
    fn between(prev: &PricePoint, next: &PricePoint) -> Self {
        let pct = (prev.price != 0)
            .then(|| (next.price as f64 - prev.price as f64) / prev.price as f64 * 100.0);
        let direction = if next.price < prev.price {
            Direction::Drop
        } else {
            Direction::Rise
        };

        Self {
            at: next.at,
            from: prev.price,
            to: next.price,
            pct,
            direction,
        }
    }
}

/// Buying signal derived from where the current price sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    AllTimeLow,
    NearMinimum { savings: u64 },
}

/// Per-product statistics over the whole ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    pub product: String,
    /// Readings sorted by timestamp ascending
    pub history: Vec<PricePoint>,
    pub current_price: u64,
    pub current_at: NaiveDateTime,
    pub min_price: u64,
    pub max_price: u64,
    pub mean_price: f64,
    pub changes: Vec<PriceChange>,
    pub all_time_low: bool,
    pub near_minimum: bool,
}

impl ProductSummary {
    pub fn observations(&self) -> usize {
        self.history.len()
    }

    pub fn savings_vs_max(&self) -> u64 {
        self.max_price - self.current_price
    }

    /// All-time low takes precedence over the near-minimum signal
    pub fn signal(&self) -> Option<Signal> {
        if self.all_time_low {
            Some(Signal::AllTimeLow)
        } else if self.near_minimum {
            Some(Signal::NearMinimum {
                savings: self.savings_vs_max(),
            })
        } else {
            None
        }
    }

    pub fn recent_changes(&self, n: usize) -> &[PriceChange] {
        let start = self.changes.len().saturating_sub(n);
        &self.changes[start..]
    }
}

/// Builds product summaries out of raw ledger rows
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    near_minimum_ratio: f64,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(NEAR_MINIMUM_RATIO)
    }
}

impl Aggregator {
    pub fn new(near_minimum_ratio: f64) -> Self {
        Self { near_minimum_ratio }
    }

    /// Summaries in first-seen product order
    pub fn summarize(&self, observations: &[Observation]) -> Vec<ProductSummary> {
        group_by_product(observations)
            .into_iter()
            .map(|(product, points)| self.summarize_product(product, points))
            .collect()
    }

    fn summarize_product(&self, product: String, mut history: Vec<PricePoint>) -> ProductSummary {
        // price breaks timestamp ties so the result only depends on the set of rows
        history.sort_by_key(|p| (p.at, p.price));

        let last = history[history.len() - 1];
        let min_price = history.iter().map(|p| p.price).min().unwrap_or(last.price);
        let max_price = history.iter().map(|p| p.price).max().unwrap_or(last.price);
        let mean_price = history.iter().map(|p| p.price as f64).sum::<f64>() / history.len() as f64;

        let changes = history
            .windows(2)
            .filter(|pair| pair[0].price != pair[1].price)
            .map(|pair| PriceChange::between(&pair[0], &pair[1]))
            .collect();

        ProductSummary {
            all_time_low: last.price == min_price && history.len() > 1,
            near_minimum: last.price as f64 <= min_price as f64 * self.near_minimum_ratio,
            product,
            current_price: last.price,
            current_at: last.at,
            min_price,
            max_price,
            mean_price,
            changes,
            history,
        }
    }
}

/// Single pass grouping that keeps first-seen order
fn group_by_product(observations: &[Observation]) -> Vec<(String, Vec<PricePoint>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<PricePoint>)> = Vec::new();

    for obs in observations {
        let point = PricePoint {
            at: obs.timestamp,
            price: obs.price,
        };
        match index.get(obs.product.as_str()) {
            Some(&i) => groups[i].1.push(point),
            None => {
                index.insert(obs.product.as_str(), groups.len());
                groups.push((obs.product.clone(), vec![point]));
            }
        }
    }

    groups
}
