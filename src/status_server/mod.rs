//! HTTP server exposing the rendered dashboard.
//!
//! Provides two endpoints over the snapshot of the last completed load:
//! - `/status` - JSON snapshot (totals, top networks, top countries)
//! - `/metrics` - Prometheus-compatible metrics
//!
//! The snapshot is immutable; a fresh load requires a fresh process run.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use handlers::{metrics_handler, status_handler};
pub use types::{DashboardSnapshot, DashboardState};

/// Creates and starts the dashboard server. Serves until the process exits.
pub async fn start_status_server(port: u16, state: DashboardState) -> Result<(), anyhow::Error> {
    let app = Router::new()
        .route("/status", get(status_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind status server to port {}: {}", port, e))?;

    log::info!("Status server listening on http://127.0.0.1:{}/", port);
    log::info!("  - Status: http://127.0.0.1:{}/status", port);
    log::info!("  - Metrics: http://127.0.0.1:{}/metrics", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Status server error: {}", e))?;

    Ok(())
}
