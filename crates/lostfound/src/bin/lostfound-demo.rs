//! Replays a short lost & found session against an in-memory store.
//!
//! Submits a lost report and a matching found report, verifies the first
//! submission, then prints the chain status and the match candidates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lostfound::{LostFound, LostFoundConfig, MemoryReportStore, NewReport, ReportKind};

#[derive(Parser)]
#[command(name = "lostfound-demo", version, about)]
struct Cli {
    /// TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final chain summary as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LostFoundConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LostFoundConfig::default(),
    };

    let app = LostFound::new(MemoryReportStore::new(), config);
    info!(head = %app.ledger().head().display_id, "ledger ready");

    let lost = app
        .submit_report(
            NewReport::new(ReportKind::Lost, "Test Wallet")
                .description("Black leather wallet")
                .location("Central Station")
                .vehicle_id("BUS001")
                .contact_info("test@example.com"),
        )
        .await?;
    println!(
        "submitted lost report {} at block {} ({})",
        lost.report.id, lost.receipt.index, lost.receipt.display_id
    );

    let found = app
        .submit_report(
            NewReport::new(ReportKind::Found, "test wallet")
                .location("central station")
                .vehicle_id("BUS001"),
        )
        .await?;
    println!(
        "submitted found report {} at block {} ({})",
        found.report.id, found.receipt.index, found.receipt.display_id
    );

    let verification = app.verify_report(lost.report.id);
    println!("report {} on ledger: {}", lost.report.id, verification.exists);

    let summary = app.chain();
    println!("chain length: {}, valid: {}", summary.length, summary.valid);

    for candidate in app.find_matches().await? {
        println!(
            "match: lost #{} <-> found #{} (score {:.2})",
            candidate.lost.id, candidate.found.id, candidate.score
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
