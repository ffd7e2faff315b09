use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used in the ledger file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A product the scraper watches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackedProduct {
    pub name: String,
    pub url: String,
}

/// One row of the price ledger
///
/// Column names match the ledger header `fecha,tienda,producto,precio,url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Observation {
    #[serde(rename = "fecha", with = "ledger_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "tienda")]
    pub store: String,
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "precio")]
    pub price: u64,
    #[serde(rename = "url")]
    pub source_url: String,
}

impl Observation {
    pub fn new(
        timestamp: NaiveDateTime,
        store: impl Into<String>,
        product: impl Into<String>,
        price: u64,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            store: store.into(),
            product: product.into(),
            price,
            source_url: source_url.into(),
        }
    }
}

/// A single point of a product's price series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricePoint {
    #[serde(with = "ledger_timestamp")]
    pub at: NaiveDateTime,
    pub price: u64,
}

pub(crate) mod ledger_timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
