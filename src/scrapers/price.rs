use anyhow::{anyhow, bail, Result};
use scraper::{Html, Selector};

/// Parse a displayed price such as `$199.990` or `$ 199.990 CLP` into `199990`
///
/// Dots are thousands separators; anything that is not a plain non-negative
/// integer once the currency markers are gone is rejected.
pub fn parse_price_text(text: &str) -> Result<u64> {
    let cleaned: String = text
        .replace("CLP", "")
        .chars()
        .filter(|c| *c != '$' && *c != '.' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        bail!("no digits in price text {:?}", text);
    }
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        bail!("price text {:?} is not a whole amount", text);
    }

    cleaned
        .parse::<u64>()
        .map_err(|e| anyhow!("price text {:?} out of range: {}", text, e))
}

/// Find the first element matching `selector` in a page and parse its text as a price
pub fn extract_price(html: &str, selector: &str) -> Result<u64> {
    let selector = Selector::parse(selector)
        .map_err(|e| anyhow!("invalid price selector {:?}: {:?}", selector, e))?;
    let document = Html::parse_document(html);

    let element = document
        .select(&selector)
        .next()
        .ok_or_else(|| anyhow!("price element not found"))?;

    let text = element.text().collect::<String>();
    parse_price_text(text.trim())
}
