use crate::config::TrackerConfig;
use crate::models::TrackedProduct;
use crate::scrapers::price::parse_price_text;
use crate::scrapers::traits::PriceSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Price reader driving a headless Chrome instance
pub struct BrowserPriceSource {
    browser: Browser,
    price_selector: String,
    wait_timeout: Duration,
    user_agent: String,
    debug_dir: PathBuf,
}

impl BrowserPriceSource {
    /// Launch Chrome with the options from the tracker config
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        info!("Launching Chrome (headless: {})...", config.headless);

        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .args(vec![OsStr::new("--disable-blink-features=AutomationControlled")])
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options)
            .context("Failed to launch Chrome browser")?;

        Ok(Self {
            browser,
            price_selector: config.price_selector.clone(),
            wait_timeout: config.wait_timeout(),
            user_agent: config.user_agent.clone(),
            debug_dir: config.debug_dir.clone(),
        })
    }

    fn read_on_tab(&self, tab: &Arc<Tab>, product: &TrackedProduct) -> Result<u64> {
        tab.set_user_agent(&self.user_agent, None, None)?;
        tab.navigate_to(&product.url)?;
        tab.wait_until_navigated()?;

        debug!("Waiting up to {:?} for {}", self.wait_timeout, self.price_selector);
        let element = tab
            .wait_for_element_with_custom_timeout(&self.price_selector, self.wait_timeout)
            .with_context(|| format!("Price element {} never appeared", self.price_selector))?;

        let text = element.get_inner_text()?;
        debug!("Raw price text for {}: {:?}", product.name, text);

        parse_price_text(&text)
    }

    /// Save what the page looked like when reading failed
    fn capture_failure(&self, tab: &Arc<Tab>, product: &TrackedProduct) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.debug_dir)?;
        let screenshot = tab.capture_screenshot(
            Page::CaptureScreenshotFormatOption::Png,
            None,
            None,
            true,
        )?;
        let path = self.debug_dir.join(format!("error_{}.png", slug(&product.name)));
        std::fs::write(&path, screenshot)?;
        Ok(path)
    }
}

#[async_trait]
impl PriceSource for BrowserPriceSource {
    async fn read_price(&self, product: &TrackedProduct) -> Result<u64> {
        info!("Opening {}", product.url);
        let tab = self.browser.new_tab().context("Failed to open tab")?;

        let result = self.read_on_tab(&tab, product);

        if result.is_err() {
            match self.capture_failure(&tab, product) {
                Ok(path) => info!("Saved screenshot of the failed page to {}", path.display()),
                Err(e) => warn!("Could not capture screenshot: {}", e),
            }
        }

        if let Err(e) = tab.close(true) {
            debug!("Tab did not close cleanly: {}", e);
        }

        result
    }

    fn source_name(&self) -> &'static str {
        "headless-chrome"
    }
}

/// Filesystem-friendly form of a product name
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}
