//! Plain-text rendering of an [`Analysis`]

use crate::analysis::{Analysis, DailyStats, Deal, Direction, Freshness, LedgerOverview, ProductSummary, Signal};
use std::fmt::Write;

const RULE_WIDTH: usize = 70;
const RECENT_CHANGES: usize = 3;

/// `199990` -> `$199,990`
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_mean(mean: f64) -> String {
    format_price(mean.round().max(0.0) as u64)
}

fn heading(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{}\n{}\n{}", rule, title, rule);
}

pub fn render_overview(overview: &LedgerOverview) -> String {
    let mut out = String::new();
    heading(&mut out, "PRICE ANALYSIS");
    let _ = writeln!(
        out,
        "Period: {} -> {}",
        overview.first_seen.format("%Y-%m-%d"),
        overview.last_seen.format("%Y-%m-%d")
    );
    let _ = writeln!(out, "Records: {}", overview.records);
    let _ = writeln!(out, "Stores: {} ({})", overview.stores.len(), overview.stores.join(", "));
    let _ = writeln!(out, "Products: {}", overview.products);
    out
}

pub fn render_product(summary: &ProductSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "- {}", summary.product);
    let _ = writeln!(out, "   Current: {}", format_price(summary.current_price));
    let _ = writeln!(out, "   Minimum: {}", format_price(summary.min_price));
    let _ = writeln!(out, "   Maximum: {}", format_price(summary.max_price));
    let _ = writeln!(out, "   Average: {}", format_mean(summary.mean_price));

    if !summary.changes.is_empty() {
        let _ = writeln!(out, "   Changes detected: {}", summary.changes.len());
        for change in summary.recent_changes(RECENT_CHANGES) {
            let arrow = match change.direction {
                Direction::Drop => "v",
                Direction::Rise => "^",
            };
            let pct = change
                .pct
                .map(|p| format!("{:+.1}%", p))
                .unwrap_or_else(|| "N/A".to_string());
            let _ = writeln!(
                out,
                "      {} {}: {} -> {} ({})",
                arrow,
                change.at.format("%Y-%m-%d %H:%M"),
                format_price(change.from),
                format_price(change.to),
                pct
            );
        }
    }

    match summary.signal() {
        Some(Signal::AllTimeLow) => {
            let _ = writeln!(out, "   ALL-TIME LOW!");
        }
        Some(Signal::NearMinimum { savings }) => {
            let _ = writeln!(
                out,
                "   Good time to buy (saves {} vs maximum)",
                format_price(savings)
            );
        }
        None => {}
    }
    out
}

pub fn render_products(summaries: &[ProductSummary]) -> String {
    let mut out = String::new();
    heading(&mut out, "PRODUCT SUMMARY");
    for summary in summaries {
        out.push('\n');
        out.push_str(&render_product(summary));
    }
    out
}

pub fn render_deals(deals: &[Deal]) -> String {
    let mut out = String::new();
    heading(&mut out, "BEST CURRENT DEALS");

    if deals.is_empty() {
        let _ = writeln!(
            out,
            "\n  Not enough data to compare (each product needs at least 2 readings)"
        );
        return out;
    }

    for (rank, deal) in deals.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {}", rank + 1, deal.product);
        let _ = writeln!(out, "   Price: {}", format_price(deal.current_price));
        match deal.over_minimum() {
            None => {
                let _ = writeln!(out, "   ALL-TIME LOW!");
            }
            Some(diff) => {
                let _ = writeln!(out, "   {} above the all-time low", format_price(diff));
            }
        }
        if deal.savings_vs_max > 0 {
            let _ = writeln!(out, "   Saves {} vs maximum", format_price(deal.savings_vs_max));
        }
        let _ = writeln!(out, "   Score: [{}] {:.0}%", deal.bar(), deal.score);
    }
    out
}

pub fn describe_freshness(freshness: Freshness) -> String {
    match freshness {
        Freshness::Today => "today".to_string(),
        Freshness::DaysAgo(1) => "1 day ago".to_string(),
        Freshness::DaysAgo(n) => format!("{} days ago", n),
    }
}

pub fn render_daily(stats: &DailyStats) -> String {
    let mut out = String::new();
    heading(&mut out, "GENERAL STATISTICS");
    let _ = writeln!(out, "\nDays with records: {}", stats.days_with_records);
    let _ = writeln!(out, "Average records per day: {:.1}", stats.mean_records_per_day);
    let _ = writeln!(
        out,
        "Busiest day: {} ({})",
        stats.busiest_day_records,
        stats.busiest_day.format("%Y-%m-%d")
    );
    let _ = writeln!(out, "\nLast tracked: {}", stats.last_seen.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "   Updated {}", describe_freshness(stats.freshness));
    out
}

/// Full report: overview, per-product blocks, deals and day statistics
pub fn render(analysis: &Analysis) -> String {
    let mut sections = Vec::new();
    if let Some(overview) = &analysis.overview {
        sections.push(render_overview(overview));
    }
    sections.push(render_products(&analysis.summaries));
    sections.push(render_deals(&analysis.deals));
    if let Some(daily) = &analysis.daily {
        sections.push(render_daily(daily));
    }
    sections.join("\n")
}
