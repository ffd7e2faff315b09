pub mod daily;
pub mod deals;
pub mod summary;

pub use daily::{DailyStats, Freshness, LedgerOverview};
pub use deals::{Deal, DealRanker};
pub use summary::{Aggregator, Direction, PriceChange, ProductSummary, Signal};

use crate::config::TrackerConfig;
use crate::models::Observation;
use chrono::NaiveDateTime;

/// Everything the text report needs, computed in one go
#[derive(Debug, Clone)]
pub struct Analysis {
    pub overview: Option<LedgerOverview>,
    pub summaries: Vec<ProductSummary>,
    pub deals: Vec<Deal>,
    pub daily: Option<DailyStats>,
}

impl Analysis {
    pub fn run(observations: &[Observation], config: &TrackerConfig, now: NaiveDateTime) -> Self {
        let summaries = Aggregator::new(config.near_minimum_ratio).summarize(observations);
        let deals = DealRanker::new(config.top_deals).top(&summaries);

        Self {
            overview: LedgerOverview::from_observations(observations),
            deals,
            daily: DailyStats::compute(observations, now),
            summaries,
        }
    }
}
