//! Presentation of aggregates onto the rendering surface.
//!
//! The presenter owns the surface and the handles to the currently
//! displayed views as explicit fields. Every render is a full replace: the
//! previous view is torn down completely before the new one is attached, so
//! the rendering engine never sees a half-updated state.

mod dashboard;
mod surface;

pub use dashboard::{ChartHandle, DashboardSurface, LayerHandle};
pub use surface::{
    ChartSpec, ChartSurface, ChartTarget, ChartTheme, MapSurface, Marker, TextSurface, TextTarget,
};

use log::debug;

use crate::aggregate::{RankedEntry, TrafficTotals};
use crate::config::{
    ALERT_COLOR, CHART_DATASET_LABEL, MARKER_FILL_OPACITY, MARKER_RADIUS_SCALE,
    NETWORK_LABEL_PREFIX, POPUP_PLACEHOLDER,
};
use crate::error_handling::RenderError;
use crate::models::AttackRecord;

/// Drives the map, the two ranked charts, and the summary statistics.
///
/// Holds exclusive ownership of the handles to the currently displayed
/// views; each render method is idempotent and replaces its view in full.
pub struct Presenter<S: MapSurface + ChartSurface + TextSurface> {
    surface: S,
    attack_layer: Option<<S as MapSurface>::Layer>,
    network_chart: Option<<S as ChartSurface>::Chart>,
    country_chart: Option<<S as ChartSurface>::Chart>,
}

impl<S: MapSurface + ChartSurface + TextSurface> Presenter<S> {
    /// Creates a presenter with no views rendered yet.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            attack_layer: None,
            network_chart: None,
            country_chart: None,
        }
    }

    /// Replaces the attack marker layer.
    ///
    /// Records without coordinates produce no marker and are silently
    /// skipped. Returns the number of markers drawn.
    pub fn render_map(&mut self, records: &[AttackRecord]) -> Result<usize, RenderError> {
        if let Some(previous) = self.attack_layer.take() {
            self.surface.remove_marker_layer(previous);
        }

        let markers: Vec<Marker> = records.iter().filter_map(build_marker).collect();
        let drawn = markers.len();
        debug!(
            "Drawing {} markers ({} records without coordinates skipped)",
            drawn,
            records.len() - drawn
        );
        self.attack_layer = Some(self.surface.draw_marker_layer(markers)?);
        Ok(drawn)
    }

    /// Replaces the origin-network distribution chart.
    pub fn render_network_chart(&mut self, entries: &[RankedEntry]) -> Result<(), RenderError> {
        if let Some(previous) = self.network_chart.take() {
            self.surface.destroy_chart(previous);
        }
        let spec = chart_spec(entries, |key| format!("{}{}", NETWORK_LABEL_PREFIX, key));
        self.network_chart = Some(
            self.surface
                .draw_bar_chart(ChartTarget::NetworkChart, spec)?,
        );
        Ok(())
    }

    /// Replaces the country distribution chart.
    pub fn render_country_chart(&mut self, entries: &[RankedEntry]) -> Result<(), RenderError> {
        if let Some(previous) = self.country_chart.take() {
            self.surface.destroy_chart(previous);
        }
        let spec = chart_spec(entries, |key| key.to_string());
        self.country_chart = Some(
            self.surface
                .draw_bar_chart(ChartTarget::CountryChart, spec)?,
        );
        Ok(())
    }

    /// Writes the two summary scalars into their display targets.
    pub fn render_stats(&mut self, totals: &TrafficTotals) -> Result<(), RenderError> {
        self.surface.write_text(
            TextTarget::TotalConnections,
            &totals.total_attempts.to_string(),
        )?;
        self.surface
            .write_text(TextTarget::UniqueSources, &totals.unique_sources.to_string())?;
        Ok(())
    }

    /// Read access to the underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Builds the marker for a record, or `None` when coordinates are absent.
fn build_marker(record: &AttackRecord) -> Option<Marker> {
    let coordinates = record.coordinates?;
    Some(Marker {
        coordinates,
        radius: (record.attempts as f64).sqrt() * MARKER_RADIUS_SCALE,
        color: ALERT_COLOR,
        fill_opacity: MARKER_FILL_OPACITY,
        popup: build_popup(record),
    })
}

/// Popup text: ip, attempts, and the three location fields, substituting a
/// placeholder for any absent field.
fn build_popup(record: &AttackRecord) -> String {
    let ip = record.ip.as_deref().unwrap_or(POPUP_PLACEHOLDER);
    let (city, state, country) = match &record.location {
        Some(loc) => (loc.city.as_str(), loc.state.as_str(), loc.country.as_str()),
        None => (POPUP_PLACEHOLDER, POPUP_PLACEHOLDER, POPUP_PLACEHOLDER),
    };
    format!(
        "IP: {}\nAttempts: {}\nLocation: {}, {}, {}",
        ip, record.attempts, city, state, country
    )
}

/// Builds a ranked chart spec with the shared fixed theme.
fn chart_spec(entries: &[RankedEntry], label: impl Fn(&str) -> String) -> ChartSpec {
    ChartSpec {
        labels: entries.iter().map(|e| label(&e.key)).collect(),
        values: entries.iter().map(|e| e.attempts).collect(),
        dataset_label: CHART_DATASET_LABEL,
        theme: ChartTheme::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoLocation;

    fn record_at(lat: f64, lon: f64, attempts: u64) -> AttackRecord {
        AttackRecord {
            ip: Some("1.2.3.4".to_string()),
            attempts,
            asn: None,
            location: None,
            coordinates: Some([lat, lon]),
        }
    }

    #[test]
    fn test_render_map_replaces_previous_layer() {
        let mut presenter = Presenter::new(DashboardSurface::new());

        let drawn = presenter
            .render_map(&[record_at(1.0, 2.0, 4), record_at(3.0, 4.0, 9)])
            .unwrap();
        assert_eq!(drawn, 2);

        let drawn = presenter.render_map(&[record_at(5.0, 6.0, 1)]).unwrap();
        assert_eq!(drawn, 1);

        // Exactly one layer attached after two renders
        assert_eq!(presenter.surface().layer_count(), 1);
        assert_eq!(presenter.surface().attached_markers().len(), 1);
    }

    #[test]
    fn test_render_map_skips_records_without_coordinates() {
        let mut presenter = Presenter::new(DashboardSurface::new());
        let mut no_coords = record_at(0.0, 0.0, 7);
        no_coords.coordinates = None;

        let drawn = presenter
            .render_map(&[no_coords, record_at(1.0, 1.0, 7)])
            .unwrap();
        assert_eq!(drawn, 1);
    }

    #[test]
    fn test_marker_radius_scales_with_sqrt_attempts() {
        let mut presenter = Presenter::new(DashboardSurface::new());
        presenter.render_map(&[record_at(0.0, 0.0, 9)]).unwrap();

        let markers = presenter.surface().attached_markers();
        assert_eq!(markers[0].radius, 3.0 * MARKER_RADIUS_SCALE);
        assert_eq!(markers[0].color, ALERT_COLOR);
    }

    #[test]
    fn test_popup_substitutes_placeholder_for_absent_fields() {
        let record = AttackRecord {
            ip: None,
            attempts: 3,
            asn: None,
            location: None,
            coordinates: Some([0.0, 0.0]),
        };
        let marker = build_marker(&record).unwrap();
        assert_eq!(
            marker.popup,
            "IP: unknown\nAttempts: 3\nLocation: unknown, unknown, unknown"
        );
    }

    #[test]
    fn test_popup_includes_location_fields() {
        let record = AttackRecord {
            ip: Some("9.8.7.6".to_string()),
            attempts: 14,
            asn: None,
            location: Some(GeoLocation {
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                country: "US".to_string(),
            }),
            coordinates: Some([39.78, -89.65]),
        };
        let marker = build_marker(&record).unwrap();
        assert_eq!(
            marker.popup,
            "IP: 9.8.7.6\nAttempts: 14\nLocation: Springfield, IL, US"
        );
    }

    #[test]
    fn test_render_charts_replace_and_label() {
        let mut presenter = Presenter::new(DashboardSurface::new());
        let entries = vec![
            RankedEntry {
                key: "999".to_string(),
                attempts: 8,
            },
            RankedEntry {
                key: "64512".to_string(),
                attempts: 3,
            },
        ];

        presenter.render_network_chart(&entries).unwrap();
        // Re-render must destroy the previous chart first
        presenter.render_network_chart(&entries[..1]).unwrap();

        let spec = presenter
            .surface()
            .chart(ChartTarget::NetworkChart)
            .unwrap();
        assert_eq!(spec.labels, vec!["ASN 999"]);
        assert_eq!(spec.values, vec![8]);
        assert_eq!(presenter.surface().chart_count(), 1);
    }

    #[test]
    fn test_country_chart_uses_raw_codes() {
        let mut presenter = Presenter::new(DashboardSurface::new());
        let entries = vec![RankedEntry {
            key: "US".to_string(),
            attempts: 5,
        }];
        presenter.render_country_chart(&entries).unwrap();

        let spec = presenter
            .surface()
            .chart(ChartTarget::CountryChart)
            .unwrap();
        assert_eq!(spec.labels, vec!["US"]);
    }

    #[test]
    fn test_render_stats_writes_both_targets() {
        let mut presenter = Presenter::new(DashboardSurface::new());
        presenter
            .render_stats(&TrafficTotals {
                total_attempts: 8,
                unique_sources: 2,
            })
            .unwrap();

        assert_eq!(
            presenter.surface().text(TextTarget::TotalConnections),
            Some("8")
        );
        assert_eq!(presenter.surface().text(TextTarget::UniqueSources), Some("2"));
    }

    #[test]
    fn test_empty_aggregates_render_empty_views() {
        let mut presenter = Presenter::new(DashboardSurface::new());
        assert_eq!(presenter.render_map(&[]).unwrap(), 0);
        presenter.render_network_chart(&[]).unwrap();
        presenter.render_country_chart(&[]).unwrap();
        presenter
            .render_stats(&TrafficTotals {
                total_attempts: 0,
                unique_sources: 0,
            })
            .unwrap();

        let spec = presenter
            .surface()
            .chart(ChartTarget::NetworkChart)
            .unwrap();
        assert!(spec.labels.is_empty());
        assert_eq!(
            presenter.surface().text(TextTarget::TotalConnections),
            Some("0")
        );
    }
}
