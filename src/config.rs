use crate::error::{Result, TrackerError};
use crate::models::TrackedProduct;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Current price within this factor of the historical minimum counts as a good buy
pub const NEAR_MINIMUM_RATIO: f64 = 1.05;
/// Length of the best-deals list
pub const DEFAULT_TOP_DEALS: usize = 5;
/// How long to wait for the price element before giving up
pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_CONFIG_PATH: &str = "tracker.toml";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Which backend reads prices off product pages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Browser,
    Http,
}

/// Tracker configuration, loaded from `tracker.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub store: String,
    pub products: Vec<TrackedProduct>,
    pub ledger_path: PathBuf,
    pub charts_dir: PathBuf,
    pub debug_dir: PathBuf,
    /// CSS selector of the element holding the cash price
    pub price_selector: String,
    pub wait_timeout_secs: u64,
    pub source: SourceKind,
    pub headless: bool,
    pub user_agent: String,
    pub near_minimum_ratio: f64,
    pub top_deals: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            store: "PC Factory".to_string(),
            products: vec![TrackedProduct {
                name: "Logitech PRO X TKL Lightspeed".to_string(),
                url: "https://www.pcfactory.cl/producto/52424-logitech-teclado-gamer-inalambrico-pro-x-tkl-lightspeed-rgb-mecanico--negro?origin=PCF".to_string(),
            }],
            ledger_path: PathBuf::from("precios.csv"),
            charts_dir: PathBuf::from("graficos"),
            debug_dir: PathBuf::from("debug"),
            price_selector: ".detail__prices__cash".to_string(),
            wait_timeout_secs: DEFAULT_WAIT_TIMEOUT_SECS,
            source: SourceKind::Browser,
            headless: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            near_minimum_ratio: NEAR_MINIMUM_RATIO,
            top_deals: DEFAULT_TOP_DEALS,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!("Loaded {} product(s) from {}", config.products.len(), path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| TrackerError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.near_minimum_ratio < 1.0 {
            return Err(TrackerError::Config(format!(
                "near_minimum_ratio must be >= 1.0, got {}",
                self.near_minimum_ratio
            )));
        }
        if self.top_deals == 0 {
            return Err(TrackerError::Config("top_deals must be at least 1".to_string()));
        }
        if let Some(product) = self.products.iter().find(|p| p.name.trim().is_empty()) {
            return Err(TrackerError::Config(format!("product with url {} has no name", product.url)));
        }
        Ok(())
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = TrackerConfig::from_toml("").unwrap();
        assert_eq!(config.near_minimum_ratio, NEAR_MINIMUM_RATIO);
        assert_eq!(config.top_deals, DEFAULT_TOP_DEALS);
        assert_eq!(config.source, SourceKind::Browser);
        assert_eq!(config.ledger_path, PathBuf::from("precios.csv"));
    }

    #[test]
    fn products_and_overrides_are_read() {
        let config = TrackerConfig::from_toml(
            r#"
            store = "Solotodo"
            source = "http"
            top_deals = 3
            wait_timeout_secs = 4

            [[products]]
            name = "Mouse"
            url = "https://example.cl/mouse"

            [[products]]
            name = "Teclado"
            url = "https://example.cl/teclado"
            "#,
        )
        .unwrap();

        assert_eq!(config.store, "Solotodo");
        assert_eq!(config.source, SourceKind::Http);
        assert_eq!(config.top_deals, 3);
        assert_eq!(config.wait_timeout(), Duration::from_secs(4));
        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[1].name, "Teclado");
    }

    #[test]
    fn rejects_ratio_below_one() {
        let err = TrackerConfig::from_toml("near_minimum_ratio = 0.9").unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn rejects_zero_top_deals() {
        assert!(TrackerConfig::from_toml("top_deals = 0").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.store, "PC Factory");
    }
}
