use crate::models::Observation;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Whole-ledger facts shown at the top of the report
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerOverview {
    pub first_seen: NaiveDateTime,
    pub last_seen: NaiveDateTime,
    pub records: usize,
    /// Store names in first-seen order
    pub stores: Vec<String>,
    pub products: usize,
}

impl LedgerOverview {
    /// `None` for an empty ledger
    pub fn from_observations(observations: &[Observation]) -> Option<Self> {
        let first_seen = observations.iter().map(|o| o.timestamp).min()?;
        let last_seen = observations.iter().map(|o| o.timestamp).max()?;

        let mut stores: Vec<String> = Vec::new();
        let mut products: Vec<&str> = Vec::new();
        for obs in observations {
            if !stores.contains(&obs.store) {
                stores.push(obs.store.clone());
            }
            if !products.contains(&obs.product.as_str()) {
                products.push(&obs.product);
            }
        }

        Some(Self {
            first_seen,
            last_seen,
            records: observations.len(),
            stores,
            products: products.len(),
        })
    }
}

/// How recent the latest reading is, in whole days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Today,
    DaysAgo(i64),
}

impl Freshness {
    pub fn since(last: NaiveDateTime, now: NaiveDateTime) -> Self {
        match (now - last).num_days() {
            d if d <= 0 => Freshness::Today,
            d => Freshness::DaysAgo(d),
        }
    }
}

/// Day-level activity over the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct DailyStats {
    pub days_with_records: usize,
    pub mean_records_per_day: f64,
    pub busiest_day: NaiveDate,
    pub busiest_day_records: usize,
    pub last_seen: NaiveDateTime,
    pub freshness: Freshness,
}

impl DailyStats {
    /// `None` for an empty ledger
    pub fn compute(observations: &[Observation], now: NaiveDateTime) -> Option<Self> {
        let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for obs in observations {
            *per_day.entry(obs.timestamp.date()).or_default() += 1;
        }

        // earliest day wins a tie
        let (busiest_day, busiest_day_records) = per_day
            .iter()
            .fold(None, |best: Option<(NaiveDate, usize)>, (&day, &count)| match best {
                Some((_, top)) if top >= count => best,
                _ => Some((day, count)),
            })?;

        let last_seen = observations.iter().map(|o| o.timestamp).max()?;

        Some(Self {
            days_with_records: per_day.len(),
            mean_records_per_day: observations.len() as f64 / per_day.len() as f64,
            busiest_day,
            busiest_day_records,
            last_seen,
            freshness: Freshness::since(last_seen, now),
        })
    }
}
