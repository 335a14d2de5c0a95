//! Fixed design constants.
//!
//! Display-legibility and visual-theme constants are deliberate design
//! choices, not tunables: they are shared between the two charts and the
//! map so every view renders with the same look.

use std::time::Duration;

/// Marker introducing each block in the raw report.
pub const BLOCK_DELIMITER: &str = "[+]";

/// Maximum number of entries kept after ranking a grouped aggregate.
///
/// A fixed cap for display legibility, not a performance necessity at
/// expected data volumes (tens to low thousands of records).
pub const TOP_ENTRIES: usize = 10;

/// Multiplier applied to `sqrt(attempts)` to size map markers (meters).
pub const MARKER_RADIUS_SCALE: f64 = 20_000.0;

/// Stroke and fill color for attack markers.
pub const ALERT_COLOR: &str = "#ff3300";

/// Marker fill opacity.
pub const MARKER_FILL_OPACITY: f64 = 0.5;

/// Bar color shared by both ranked charts.
pub const BAR_COLOR: &str = "#4CAF50";

/// Axis tick and legend text color.
pub const TICK_COLOR: &str = "#ffffff";

/// Axis gridline color.
pub const GRIDLINE_COLOR: &str = "#333333";

/// Dataset label shown in the chart legend.
pub const CHART_DATASET_LABEL: &str = "Attack Attempts";

/// Prefix applied to origin-network chart labels.
pub const NETWORK_LABEL_PREFIX: &str = "ASN ";

/// Placeholder substituted for absent fields in marker popups.
pub const POPUP_PLACEHOLDER: &str = "unknown";

/// HTTP fetch timeout for the report resource.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent when fetching the report over HTTP.
pub const DEFAULT_USER_AGENT: &str = concat!("honeypot_dashboard/", env!("CARGO_PKG_VERSION"));
