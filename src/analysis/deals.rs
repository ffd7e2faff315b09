use super::summary::ProductSummary;
use crate::config::DEFAULT_TOP_DEALS;
use serde::{Deserialize, Serialize};

/// Number of cells in the score bar
pub const BAR_WIDTH: usize = 10;

/// A product ranked by how close it currently is to its cheapest price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    pub product: String,
    pub current_price: u64,
    pub min_price: u64,
    pub savings_vs_max: u64,
    /// 100 = at the historical minimum, 0 = at the historical maximum
    pub score: f64,
}

impl Deal {
    fn from_summary(summary: &ProductSummary) -> Self {
        let score = if summary.max_price == summary.min_price {
            100.0
        } else {
            (summary.max_price - summary.current_price) as f64
                / (summary.max_price - summary.min_price) as f64
                * 100.0
        };

        Self {
            product: summary.product.clone(),
            current_price: summary.current_price,
            min_price: summary.min_price,
            savings_vs_max: summary.savings_vs_max(),
            score,
        }
    }

    pub fn is_all_time_low(&self) -> bool {
        self.current_price == self.min_price
    }

    /// How far above the historical minimum; `None` at the minimum
    pub fn over_minimum(&self) -> Option<u64> {
        (!self.is_all_time_low()).then(|| self.current_price - self.min_price)
    }

    pub fn filled_cells(&self) -> usize {
        ((self.score / 10.0).round() as usize).min(BAR_WIDTH)
    }

    pub fn bar(&self) -> String {
        let filled = self.filled_cells();
        format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
    }
}

/// Ranks summaries into a best-deals list
#[derive(Debug, Clone, Copy)]
pub struct DealRanker {
    top_n: usize,
}

impl Default for DealRanker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_DEALS)
    }
}

impl DealRanker {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Every eligible product, best first
    ///
    /// Products with fewer than two readings have no history to compare against
    /// and are left out.
    pub fn rank_all(&self, summaries: &[ProductSummary]) -> Vec<Deal> {
        let mut deals: Vec<Deal> = summaries
            .iter()
            .filter(|s| s.observations() >= 2)
            .map(Deal::from_summary)
            .collect();
        // stable: equal scores keep ledger order
        deals.sort_by(|a, b| b.score.total_cmp(&a.score));
        deals
    }

    pub fn top(&self, summaries: &[ProductSummary]) -> Vec<Deal> {
        let mut deals = self.rank_all(summaries);
        deals.truncate(self.top_n);
        deals
    }
}
