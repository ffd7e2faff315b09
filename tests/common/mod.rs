//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use price_scout::Observation;

pub const STORE: &str = "PC Factory";

/// `2025-01-<day> <hour>:00:00`
pub fn ts(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn obs(at: NaiveDateTime, product: &str, price: u64) -> Observation {
    Observation::new(at, STORE, product, price, format!("https://www.pcfactory.cl/{}", product))
}

/// Three products: a dip-and-recover keyboard, a falling mouse and a single-reading headset
pub fn sample_ledger() -> Vec<Observation> {
    vec![
        obs(ts(1, 9), "Teclado", 1000),
        obs(ts(1, 9), "Mouse", 50000),
        obs(ts(2, 9), "Teclado", 900),
        obs(ts(2, 9), "Mouse", 45000),
        obs(ts(2, 10), "Audifonos", 30000),
        obs(ts(3, 9), "Teclado", 950),
        obs(ts(3, 9), "Mouse", 40000),
    ]
}
