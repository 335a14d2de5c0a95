//! Status server data structures.

use std::sync::Arc;

use serde::Serialize;

use crate::aggregate::{RankedEntry, TrafficTotals};

/// Immutable snapshot of a completed load, shared with the server.
///
/// Built once after rendering; there are no live updates.
#[derive(Clone)]
pub struct DashboardState {
    /// The snapshot itself, behind `Arc` so handler clones stay cheap.
    pub snapshot: Arc<DashboardSnapshot>,
}

/// Everything the dashboard endpoints expose about the last load.
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot {
    /// Millisecond timestamp of when the load completed.
    pub loaded_at_ms: i64,
    /// Number of records parsed from the report.
    pub record_count: usize,
    /// Number of markers drawn on the map.
    pub markers_rendered: usize,
    /// Global totals.
    pub totals: TrafficTotals,
    /// Ranked origin networks (top 10).
    pub top_networks: Vec<RankedEntry>,
    /// Ranked countries (top 10).
    pub top_countries: Vec<RankedEntry>,
}
