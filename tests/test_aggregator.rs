//! Aggregator properties over whole ledgers.

mod common;

use common::{obs, sample_ledger, ts};
use price_scout::analysis::{Direction, Signal};
use price_scout::Aggregator;
use std::collections::HashSet;

#[test]
fn dip_and_recover_scenario() {
    let rows = vec![
        obs(ts(1, 9), "X", 1000),
        obs(ts(2, 9), "X", 900),
        obs(ts(3, 9), "X", 950),
    ];
    let summaries = Aggregator::default().summarize(&rows);
    assert_eq!(summaries.len(), 1);

    let x = &summaries[0];
    assert_eq!(x.current_price, 950);
    assert_eq!(x.min_price, 900);
    assert_eq!(x.max_price, 1000);
    assert!((x.mean_price - 950.0).abs() < 1e-9);

    assert_eq!(x.changes.len(), 2);
    assert_eq!(x.changes[0].at, ts(2, 9));
    assert_eq!((x.changes[0].from, x.changes[0].to), (1000, 900));
    assert!((x.changes[0].pct.unwrap() + 10.0).abs() < 1e-9);
    assert_eq!(x.changes[0].direction, Direction::Drop);
    assert_eq!(x.changes[1].at, ts(3, 9));
    assert!((x.changes[1].pct.unwrap() - 5.555_555).abs() < 1e-4);
    assert_eq!(x.changes[1].direction, Direction::Rise);

    assert!(!x.all_time_low);
    // 950 > 900 * 1.05
    assert!(!x.near_minimum);
    assert_eq!(x.signal(), None);
}

#[test]
fn single_reading_product() {
    let summaries = Aggregator::default().summarize(&[obs(ts(1, 9), "Solo", 12990)]);
    let solo = &summaries[0];
    assert!(solo.changes.is_empty());
    assert_eq!(solo.min_price, 12990);
    assert_eq!(solo.max_price, 12990);
    assert_eq!(solo.current_price, 12990);
    assert!(!solo.all_time_low);
    assert_eq!(solo.signal(), Some(Signal::NearMinimum { savings: 0 }));
}

#[test]
fn one_summary_per_distinct_product_in_first_seen_order() {
    let rows = sample_ledger();
    let summaries = Aggregator::default().summarize(&rows);

    let distinct: HashSet<&str> = rows.iter().map(|o| o.product.as_str()).collect();
    assert_eq!(summaries.len(), distinct.len());

    let order: Vec<&str> = summaries.iter().map(|s| s.product.as_str()).collect();
    assert_eq!(order, vec!["Teclado", "Mouse", "Audifonos"]);
}

#[test]
fn rise_then_fall_has_one_change_per_transition() {
    let prices = [100, 120, 150, 150, 130, 90];
    let rows: Vec<_> = prices
        .iter()
        .enumerate()
        .map(|(i, p)| obs(ts(i as u32 + 1, 9), "Y", *p))
        .collect();
    let y = &Aggregator::default().summarize(&rows)[0];

    assert_eq!(y.min_price, 90);
    assert_eq!(y.max_price, 150);
    assert_eq!(y.changes.len(), 4);
    let directions: Vec<Direction> = y.changes.iter().map(|c| c.direction).collect();
    assert_eq!(
        directions,
        vec![Direction::Rise, Direction::Rise, Direction::Drop, Direction::Drop]
    );
    assert!(y.all_time_low);
}

#[test]
fn summaries_are_idempotent() {
    let rows = sample_ledger();
    let aggregator = Aggregator::default();
    assert_eq!(aggregator.summarize(&rows), aggregator.summarize(&rows));
}

#[test]
fn row_order_does_not_change_a_summary() {
    let rows = vec![
        obs(ts(3, 9), "Z", 700),
        obs(ts(1, 9), "Z", 900),
        obs(ts(2, 9), "Z", 800),
        // same timestamp, different price
        obs(ts(2, 9), "Z", 850),
    ];
    let mut reversed = rows.clone();
    reversed.reverse();

    let aggregator = Aggregator::default();
    let a = &aggregator.summarize(&rows)[0];
    let b = &aggregator.summarize(&reversed)[0];
    assert_eq!(a, b);
    assert_eq!(a.current_price, 700);
    assert_eq!(a.history.first().unwrap().price, 900);
}

#[test]
fn current_price_follows_latest_timestamp_not_file_order() {
    let rows = vec![obs(ts(5, 9), "W", 300), obs(ts(1, 9), "W", 500)];
    let w = &Aggregator::default().summarize(&rows)[0];
    assert_eq!(w.current_price, 300);
    assert_eq!(w.current_at, ts(5, 9));
    assert_eq!(w.changes.len(), 1);
    assert_eq!(w.changes[0].direction, Direction::Drop);
}

#[test]
fn store_and_url_do_not_split_a_product() {
    let mut moved = obs(ts(2, 9), "Teclado", 800);
    moved.store = "Otra Tienda".into();
    moved.source_url = "https://elsewhere".into();
    let rows = vec![obs(ts(1, 9), "Teclado", 1000), moved];

    let summaries = Aggregator::default().summarize(&rows);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].observations(), 2);
}
