//! In-process dashboard surface.
//!
//! `DashboardSurface` is the concrete implementation of the rendering
//! capabilities: it holds the currently attached marker layer, charts, and
//! text slots, and can print them to the terminal. The optional status
//! server serves a snapshot of the same state.

use std::collections::HashMap;

use colored::*;

use super::surface::{
    ChartSpec, ChartSurface, ChartTarget, MapSurface, Marker, TextSurface, TextTarget,
};
use crate::error_handling::RenderError;

/// Handle to a marker layer attached to the dashboard map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerHandle(u64);

/// Handle to a chart constructed on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

/// Concrete in-process rendering surface.
///
/// Attach/remove and create/destroy are genuine: removed layers and
/// destroyed charts are dropped from the surface, so at most one of each
/// view is attached after a render cycle.
#[derive(Debug, Default)]
pub struct DashboardSurface {
    next_id: u64,
    layers: HashMap<LayerHandle, Vec<Marker>>,
    charts: HashMap<ChartHandle, (ChartTarget, ChartSpec)>,
    texts: HashMap<TextTarget, String>,
}

impl DashboardSurface {
    /// Creates an empty surface with no attached views.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// All markers in currently attached layers.
    pub fn attached_markers(&self) -> Vec<&Marker> {
        self.layers.values().flatten().collect()
    }

    /// Number of currently attached marker layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The chart currently bound to a target, if any.
    pub fn chart(&self, target: ChartTarget) -> Option<&ChartSpec> {
        self.charts
            .values()
            .find(|(t, _)| *t == target)
            .map(|(_, spec)| spec)
    }

    /// Number of currently constructed charts.
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    /// The current content of a text target, if written.
    pub fn text(&self, target: TextTarget) -> Option<&str> {
        self.texts.get(&target).map(String::as_str)
    }

    /// Prints the current dashboard state to the terminal.
    pub fn print_dashboard(&self) {
        println!("{}", "── Honeypot activity ──".bold());
        println!(
            "  total connections: {}",
            self.text(TextTarget::TotalConnections)
                .unwrap_or("-")
                .red()
                .bold()
        );
        println!(
            "  unique sources:    {}",
            self.text(TextTarget::UniqueSources)
                .unwrap_or("-")
                .red()
                .bold()
        );

        if let Some(spec) = self.chart(ChartTarget::NetworkChart) {
            print_chart("Top origin networks", spec);
        }
        if let Some(spec) = self.chart(ChartTarget::CountryChart) {
            print_chart("Top countries", spec);
        }

        let markers = self.attached_markers();
        if !markers.is_empty() {
            println!("\n{}", "Map markers".bold());
            for marker in markers {
                println!(
                    "  ({:>8.3}, {:>8.3}) r={:.0}m  {}",
                    marker.coordinates[0],
                    marker.coordinates[1],
                    marker.radius,
                    marker.popup.replace('\n', " | ").dimmed()
                );
            }
        }
    }
}

/// Prints one ranked bar chart as scaled text bars.
fn print_chart(title: &str, spec: &ChartSpec) {
    const BAR_WIDTH: usize = 40;

    println!("\n{} ({})", title.bold(), spec.dataset_label);
    let max = spec.values.iter().copied().max().unwrap_or(0).max(1);
    let label_width = spec.labels.iter().map(String::len).max().unwrap_or(0);
    for (label, value) in spec.labels.iter().zip(&spec.values) {
        let filled = ((*value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
        println!(
            "  {:>width$}  {} {}",
            label,
            "█".repeat(filled.max(1)).green(),
            value,
            width = label_width
        );
    }
}

impl MapSurface for DashboardSurface {
    type Layer = LayerHandle;

    fn draw_marker_layer(&mut self, markers: Vec<Marker>) -> Result<LayerHandle, RenderError> {
        let handle = LayerHandle(self.next_id());
        self.layers.insert(handle, markers);
        Ok(handle)
    }

    fn remove_marker_layer(&mut self, layer: LayerHandle) {
        self.layers.remove(&layer);
    }
}

impl ChartSurface for DashboardSurface {
    type Chart = ChartHandle;

    fn draw_bar_chart(
        &mut self,
        target: ChartTarget,
        spec: ChartSpec,
    ) -> Result<ChartHandle, RenderError> {
        // A chart still bound to this target means the caller skipped the
        // destroy step; the engine cannot replace datasets in place.
        if self.charts.values().any(|(t, _)| *t == target) {
            return Err(RenderError::DrawFailed(format!(
                "chart already bound to {}",
                target.element_id()
            )));
        }
        let handle = ChartHandle(self.next_id());
        self.charts.insert(handle, (target, spec));
        Ok(handle)
    }

    fn destroy_chart(&mut self, chart: ChartHandle) {
        self.charts.remove(&chart);
    }
}

impl TextSurface for DashboardSurface {
    fn write_text(&mut self, target: TextTarget, value: &str) -> Result<(), RenderError> {
        self.texts.insert(target, value.to_string());
        Ok(())
    }
}
