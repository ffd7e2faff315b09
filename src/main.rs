use clap::{Parser, Subcommand};
use price_scout::charts::ChartWriter;
use price_scout::config::DEFAULT_CONFIG_PATH;
use price_scout::{report, scrapers, tracker, Analysis, Aggregator, Ledger, TrackerConfig, TrackerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "price-scout", about = "Track product prices and spot good deals")]
struct Cli {
    /// Path to the tracker config
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read current prices and append them to the ledger
    Scrape,
    /// Print the price report
    Analyze,
    /// Save chart datasets
    Charts,
    /// Scrape, analyze and chart in one go
    Run,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<TrackerError>() {
                Some(missing @ TrackerError::MissingLedger(_)) => warn!("{}", missing),
                _ => error!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = TrackerConfig::load(&cli.config)?;
    let ledger = Ledger::new(&config.ledger_path);

    match cli.command {
        Command::Scrape => scrape(&config, &ledger).await,
        Command::Analyze => analyze(&config, &ledger),
        Command::Charts => charts(&config, &ledger),
        Command::Run => {
            scrape(&config, &ledger).await?;
            analyze(&config, &ledger)?;
            charts(&config, &ledger)
        }
    }
}

async fn scrape(config: &TrackerConfig, ledger: &Ledger) -> anyhow::Result<()> {
    info!("Tracking {} product(s) at {}", config.products.len(), config.store);

    let source = scrapers::from_config(config)?;
    let outcome = tracker::scrape_all(source.as_ref(), &config.products, &config.store, ledger).await?;

    info!(
        "✅ Recorded {} price(s), {} failed",
        outcome.recorded.len(),
        outcome.failures.len()
    );
    for failure in &outcome.failures {
        warn!("{}", failure);
    }

    Ok(())
}

fn analyze(config: &TrackerConfig, ledger: &Ledger) -> anyhow::Result<()> {
    let observations = ledger.load()?;
    let analysis = Analysis::run(&observations, config, tracker::now());

    println!("{}", report::render(&analysis));
    println!("{}", "=".repeat(70));
    println!("Analysis complete");
    println!("Tip: run `price-scout charts` to export trend data");

    Ok(())
}

fn charts(config: &TrackerConfig, ledger: &Ledger) -> anyhow::Result<()> {
    let observations = ledger.load()?;
    let summaries = Aggregator::new(config.near_minimum_ratio).summarize(&observations);

    info!("Building charts for {} product(s)...", summaries.len());
    let written = ChartWriter::new(&config.charts_dir).write_all(&summaries, tracker::now())?;
    info!("💾 Saved {} chart file(s) to {}", written.len(), config.charts_dir.display());

    Ok(())
}
