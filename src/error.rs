use std::path::PathBuf;

/// Errors raised by the ledger, analysis and chart layers
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("price ledger not found at {}; run `price-scout scrape` first", .0.display())]
    MissingLedger(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Could not read price for {product}: {reason}")]
    Reading { product: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
