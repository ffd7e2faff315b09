//! Chart datasets built from product summaries
//!
//! Each chart is saved as a JSON document a plotting front end can draw
//! without recomputing anything from the ledger.

use crate::analysis::ProductSummary;
use crate::error::Result;
use crate::models::PricePoint;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

const MAX_LABEL_CHARS: usize = 30;

/// Price history of one product with its reference lines
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendChart {
    pub product: String,
    pub series: Vec<PricePoint>,
    pub min_price: u64,
    pub max_price: u64,
    pub mean_price: f64,
    pub current: PricePoint,
    pub all_time_low: bool,
}

impl From<&ProductSummary> for TrendChart {
    fn from(summary: &ProductSummary) -> Self {
        Self {
            product: summary.product.clone(),
            series: summary.history.clone(),
            min_price: summary.min_price,
            max_price: summary.max_price,
            mean_price: summary.mean_price,
            current: PricePoint {
                at: summary.current_at,
                price: summary.current_price,
            },
            all_time_low: summary.all_time_low,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonSeries {
    pub product: String,
    pub series: Vec<PricePoint>,
}

/// All products on a shared time axis
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonChart {
    pub series: Vec<ComparisonSeries>,
}

impl ComparisonChart {
    /// Needs at least two products to compare
    pub fn build(summaries: &[ProductSummary]) -> Option<Self> {
        if summaries.len() < 2 {
            return None;
        }
        Some(Self {
            series: summaries
                .iter()
                .map(|s| ComparisonSeries {
                    product: s.product.clone(),
                    series: s.history.clone(),
                })
                .collect(),
        })
    }
}

/// One group of bars in the statistics chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsBar {
    pub label: String,
    pub min_price: u64,
    pub current_price: u64,
    pub mean_price: f64,
    pub max_price: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsChart {
    pub bars: Vec<StatsBar>,
}

impl StatsChart {
    pub fn build(summaries: &[ProductSummary]) -> Self {
        Self {
            bars: summaries
                .iter()
                .map(|s| StatsBar {
                    label: short_label(&s.product),
                    min_price: s.min_price,
                    current_price: s.current_price,
                    mean_price: s.mean_price,
                    max_price: s.max_price,
                })
                .collect(),
        }
    }
}

/// Truncate long product names for axis labels
pub fn short_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let head: String = name.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

/// Writes chart datasets as timestamped JSON files
pub struct ChartWriter {
    dir: PathBuf,
}

impl ChartWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, kind: &str, now: NaiveDateTime) -> PathBuf {
        self.dir.join(format!("{}_{}.json", kind, now.format("%Y%m%d_%H%M%S")))
    }

    fn save<T: Serialize>(&self, kind: &str, chart: &T, now: NaiveDateTime) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(kind, now);
        let json = serde_json::to_string_pretty(chart)?;
        std::fs::write(&path, json)?;
        info!("Chart saved to {}", path.display());
        Ok(path)
    }

    /// Write trend, comparison and statistics charts; returns the files written
    pub fn write_all(&self, summaries: &[ProductSummary], now: NaiveDateTime) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        if summaries.is_empty() {
            warn!("No products in the ledger, nothing to chart");
            return Ok(written);
        }

        let trends: Vec<TrendChart> = summaries.iter().map(TrendChart::from).collect();
        for trend in &trends {
            info!("Trend chart built for: {}", trend.product);
        }
        written.push(self.save("trends", &trends, now)?);

        match ComparisonChart::build(summaries) {
            Some(comparison) => written.push(self.save("comparison", &comparison, now)?),
            None => warn!("At least 2 products are needed for a comparison chart"),
        }

        written.push(self.save("statistics", &StatsChart::build(summaries), now)?);
        Ok(written)
    }
}
