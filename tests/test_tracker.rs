//! Scrape pipeline with a stub price source.

mod common;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use price_scout::scrapers::PriceSource;
use price_scout::{tracker, Ledger, TrackedProduct, TrackerError};
use std::collections::HashMap;

struct StubSource {
    prices: HashMap<String, u64>,
}

#[async_trait]
impl PriceSource for StubSource {
    async fn read_price(&self, product: &TrackedProduct) -> Result<u64> {
        self.prices
            .get(&product.name)
            .copied()
            .ok_or_else(|| anyhow!("timed out waiting for price element"))
    }

    fn source_name(&self) -> &'static str {
        "stub"
    }
}

fn product(name: &str) -> TrackedProduct {
    TrackedProduct {
        name: name.to_string(),
        url: format!("https://www.pcfactory.cl/{}", name),
    }
}

#[tokio::test]
async fn failed_product_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("precios.csv"));
    let source = StubSource {
        prices: HashMap::from([("Teclado".to_string(), 199990), ("Mouse".to_string(), 39990)]),
    };
    let products = vec![product("Teclado"), product("Roto"), product("Mouse")];

    let outcome = tracker::scrape_all(&source, &products, common::STORE, &ledger)
        .await
        .unwrap();

    assert_eq!(outcome.recorded.len(), 2);
    assert_eq!(outcome.failures.len(), 1);
    match &outcome.failures[0] {
        TrackerError::Reading { product, reason } => {
            assert_eq!(product, "Roto");
            assert!(reason.contains("timed out"));
        }
        other => panic!("unexpected failure {:?}", other),
    }

    let rows = ledger.load().unwrap();
    let names: Vec<&str> = rows.iter().map(|o| o.product.as_str()).collect();
    assert_eq!(names, vec!["Teclado", "Mouse"]);
    assert_eq!(rows[0].store, common::STORE);
    assert_eq!(rows[0].source_url, "https://www.pcfactory.cl/Teclado");
    assert_eq!(rows[1].price, 39990);
}

#[tokio::test]
async fn nothing_read_leaves_no_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("precios.csv"));
    let source = StubSource { prices: HashMap::new() };

    let outcome = tracker::scrape_all(&source, &[product("Roto")], common::STORE, &ledger)
        .await
        .unwrap();

    assert!(outcome.recorded.is_empty());
    assert!(!ledger.exists());
}
