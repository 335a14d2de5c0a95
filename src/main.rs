//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `honeypot_dashboard` library that
//! handles command-line argument parsing, logger initialization, and
//! user-facing output formatting. All core functionality is implemented in
//! the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use honeypot_dashboard::initialization::init_logger_with;
use honeypot_dashboard::{run_load, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_load(config).await {
        Ok(report) => {
            println!(
                "✅ Parsed {} record{} ({} attempts from {} sources, {} markers) in {:.1}s",
                report.record_count,
                if report.record_count == 1 { "" } else { "s" },
                report.totals.total_attempts,
                report.totals.unique_sources,
                report.markers_rendered,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("honeypot_dashboard error: {:#}", e);
            process::exit(1);
        }
    }
}
