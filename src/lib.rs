//! Price tracking for a handful of products on a single web shop.
//!
//! Readings go into an append-only CSV ledger; the analysis layer turns the
//! ledger into per-product summaries, a best-deals ranking, day statistics
//! and chart datasets.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod report;
pub mod scrapers;
pub mod tracker;

pub use analysis::{Aggregator, Analysis, DealRanker};
pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use ledger::Ledger;
pub use models::{Observation, PricePoint, TrackedProduct};
