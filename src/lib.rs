//! honeypot_dashboard library: honeypot report visualization pipeline.
//!
//! Ingests a semi-structured text report of intrusion attempts, parses it
//! into typed records, aggregates along three dimensions (origin network,
//! country, volume), and drives a world-map marker layer, two ranked bar
//! charts, and two summary statistics.
//!
//! # Example
//!
//! ```no_run
//! use honeypot_dashboard::{run_load, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     report: "output.txt".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_load(config).await?;
//! println!(
//!     "{} records, {} attempts from {} sources",
//!     report.record_count, report.totals.total_attempts, report.totals.unique_sources
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod render;
pub mod status_server;

pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, RenderError};
pub use run::{run_load, LoadReport};

mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use chrono::Utc;
    use log::info;

    use crate::aggregate::{rank_by_country, rank_by_network, traffic_totals, TrafficTotals};
    use crate::config::Config;
    use crate::fetch::fetch_report;
    use crate::initialization::init_client;
    use crate::parse::parse_report;
    use crate::render::{DashboardSurface, Presenter};
    use crate::status_server::{start_status_server, DashboardSnapshot, DashboardState};

    /// Results of a completed load.
    #[derive(Debug, Clone)]
    pub struct LoadReport {
        /// Number of records parsed from the report.
        pub record_count: usize,
        /// Number of markers drawn on the map.
        pub markers_rendered: usize,
        /// Global totals across every record.
        pub totals: TrafficTotals,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs the fetch → parse → aggregate → render pipeline once.
    ///
    /// Control flow is strictly one-directional and single-pass; the fetch
    /// is the only suspension point. On any failure the load aborts with no
    /// retry and no rollback of views already rendered in this cycle.
    ///
    /// With `--status-port` set, a successful load is followed by serving
    /// the dashboard snapshot over HTTP until the process exits.
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch fails or a render target fails;
    /// malformed report fields degrade to absent values instead of failing.
    pub async fn run_load(config: Config) -> Result<LoadReport> {
        let start_time = std::time::Instant::now();

        let client = init_client().context("Failed to initialize HTTP client")?;
        let raw = fetch_report(&client, &config.report).await?;

        let records = parse_report(&raw);
        info!("Parsed {} attack records", records.len());

        let top_networks = rank_by_network(&records);
        let top_countries = rank_by_country(&records);
        let totals = traffic_totals(&records);

        let mut presenter = Presenter::new(DashboardSurface::new());

        // Map first is a display-priority choice, not a correctness requirement
        let markers_rendered = presenter
            .render_map(&records)
            .context("Failed to render attack map")?;
        presenter
            .render_network_chart(&top_networks)
            .context("Failed to render origin-network chart")?;
        presenter
            .render_country_chart(&top_countries)
            .context("Failed to render country chart")?;
        presenter
            .render_stats(&totals)
            .context("Failed to render summary statistics")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Load complete: {} records, {} attempts from {} sources, {} markers in {:.2}s",
            records.len(),
            totals.total_attempts,
            totals.unique_sources,
            markers_rendered,
            elapsed_seconds
        );

        if !config.quiet {
            presenter.surface().print_dashboard();
        }

        let report = LoadReport {
            record_count: records.len(),
            markers_rendered,
            totals,
            elapsed_seconds,
        };

        if let Some(port) = config.status_port {
            let state = DashboardState {
                snapshot: Arc::new(DashboardSnapshot {
                    loaded_at_ms: Utc::now().timestamp_millis(),
                    record_count: report.record_count,
                    markers_rendered,
                    totals,
                    top_networks,
                    top_countries,
                }),
            };
            start_status_server(port, state).await?;
        }

        Ok(report)
    }
}
