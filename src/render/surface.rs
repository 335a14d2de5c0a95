//! Capability surface of the external rendering collaborators.
//!
//! The core never talks to a map-tile or charting engine directly; it only
//! needs three narrow capabilities: overlay a replaceable group of circular
//! markers with popups, construct/destroy a labeled bar chart bound to a
//! display target, and write text into a fixed display target.

use crate::config::{BAR_COLOR, GRIDLINE_COLOR, TICK_COLOR};
use crate::error_handling::RenderError;

/// Fixed chart mount points in the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartTarget {
    /// Origin-network distribution chart.
    NetworkChart,
    /// Country distribution chart.
    CountryChart,
}

impl ChartTarget {
    /// Identifier of the mount point element.
    pub fn element_id(self) -> &'static str {
        match self {
            ChartTarget::NetworkChart => "asnChart",
            ChartTarget::CountryChart => "countryChart",
        }
    }
}

/// Fixed scalar-text display targets in the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTarget {
    /// Total connection attempts across all records.
    TotalConnections,
    /// Distinct source address count.
    UniqueSources,
}

impl TextTarget {
    /// Identifier of the text element.
    pub fn element_id(self) -> &'static str {
        match self {
            TextTarget::TotalConnections => "total-connections",
            TextTarget::UniqueSources => "unique-ips",
        }
    }
}

/// One circular attack marker with an attached popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// `[latitude, longitude]` in degrees.
    pub coordinates: [f64; 2],
    /// Circle radius in meters.
    pub radius: f64,
    /// Stroke and fill color.
    pub color: &'static str,
    /// Fill opacity.
    pub fill_opacity: f64,
    /// Popup text shown when the marker is selected.
    pub popup: String,
}

/// Visual theme applied identically to both ranked charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTheme {
    /// Bar fill color.
    pub bar_color: &'static str,
    /// Axis tick and legend text color.
    pub tick_color: &'static str,
    /// Axis gridline color.
    pub gridline_color: &'static str,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            bar_color: BAR_COLOR,
            tick_color: TICK_COLOR,
            gridline_color: GRIDLINE_COLOR,
        }
    }
}

/// A labeled bar chart ready to hand to the charting engine.
///
/// `labels` and `values` are index-aligned and already ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Ranked bar labels.
    pub labels: Vec<String>,
    /// Aggregated sums, in the same order as `labels`.
    pub values: Vec<u64>,
    /// Legend label for the single dataset.
    pub dataset_label: &'static str,
    /// Fixed visual theme, not derived from data.
    pub theme: ChartTheme,
}

/// Map capability: overlay and remove whole marker layers.
pub trait MapSurface {
    /// Opaque handle to an attached marker layer.
    type Layer;

    /// Draws a group of markers as one layer and attaches it to the map.
    fn draw_marker_layer(&mut self, markers: Vec<Marker>) -> Result<Self::Layer, RenderError>;

    /// Removes a previously attached layer wholesale.
    fn remove_marker_layer(&mut self, layer: Self::Layer);
}

/// Chart capability: construct and destroy bar charts bound to a target.
///
/// The engine does not support in-place dataset replacement safely across
/// schema changes, so replacement is destroy-then-create.
pub trait ChartSurface {
    /// Opaque handle to a constructed chart.
    type Chart;

    /// Constructs a bar chart bound to the given mount point.
    fn draw_bar_chart(
        &mut self,
        target: ChartTarget,
        spec: ChartSpec,
    ) -> Result<Self::Chart, RenderError>;

    /// Destroys a previously constructed chart.
    fn destroy_chart(&mut self, chart: Self::Chart);
}

/// Text capability: write a value into a fixed display target.
pub trait TextSurface {
    /// Replaces the content of the target element.
    fn write_text(&mut self, target: TextTarget, value: &str) -> Result<(), RenderError>;
}
