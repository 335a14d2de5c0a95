//! Presentation pipeline behavior: full-replace semantics and failure
//! propagation, exercised with the concrete surface and a failing double.

use honeypot_dashboard::aggregate::{rank_by_country, rank_by_network, traffic_totals};
use honeypot_dashboard::parse::parse_report;
use honeypot_dashboard::render::{
    ChartSpec, ChartSurface, ChartTarget, DashboardSurface, MapSurface, Marker, Presenter,
    TextSurface, TextTarget,
};
use honeypot_dashboard::RenderError;

const REPORT: &str = "[+] IP: 1.2.3.4 - 5 attempts\nASN: 999\nLocation: City, ST, US\nLat/Lon: 10.0, 20.0\n[+] IP: 5.6.7.8 - 3 attempts\nASN: 999\nLocation: City2, ST2, CA\nLat/Lon: 30.0, 40.0\n[+] IP: 9.9.9.9 - 2 attempts\nASN: 111";

fn render_all(
    presenter: &mut Presenter<impl MapSurface + ChartSurface + TextSurface>,
    raw: &str,
) -> Result<usize, RenderError> {
    let records = parse_report(raw);
    let markers = presenter.render_map(&records)?;
    presenter.render_network_chart(&rank_by_network(&records))?;
    presenter.render_country_chart(&rank_by_country(&records))?;
    presenter.render_stats(&traffic_totals(&records))?;
    Ok(markers)
}

#[test]
fn test_full_pipeline_renders_all_views() {
    let mut presenter = Presenter::new(DashboardSurface::new());
    let markers = render_all(&mut presenter, REPORT).unwrap();

    // The third record has no coordinates and draws no marker
    assert_eq!(markers, 2);

    let surface = presenter.surface();
    assert_eq!(surface.attached_markers().len(), 2);
    assert_eq!(surface.chart_count(), 2);
    assert_eq!(surface.text(TextTarget::TotalConnections), Some("10"));
    assert_eq!(surface.text(TextTarget::UniqueSources), Some("3"));

    let network = surface.chart(ChartTarget::NetworkChart).unwrap();
    assert_eq!(network.labels, vec!["ASN 999", "ASN 111"]);
    assert_eq!(network.values, vec![8, 2]);

    let country = surface.chart(ChartTarget::CountryChart).unwrap();
    assert_eq!(country.labels, vec!["US", "CA"]);
}

#[test]
fn test_reload_fully_replaces_every_view() {
    let mut presenter = Presenter::new(DashboardSurface::new());
    render_all(&mut presenter, REPORT).unwrap();
    render_all(&mut presenter, "[+] IP: 8.8.8.8 - 1 attempts\nLat/Lon: 1.0, 2.0").unwrap();

    let surface = presenter.surface();
    assert_eq!(surface.layer_count(), 1);
    assert_eq!(surface.attached_markers().len(), 1);
    assert_eq!(surface.chart_count(), 2);
    assert_eq!(surface.text(TextTarget::TotalConnections), Some("1"));

    // The new network chart is empty (no ASN line in the second report)
    let network = surface.chart(ChartTarget::NetworkChart).unwrap();
    assert!(network.labels.is_empty());
}

/// Surface double whose chart capability fails, as when a mount point
/// element is missing from the host page.
#[derive(Default)]
struct BrokenChartSurface {
    layers: usize,
    texts_written: usize,
}

impl MapSurface for BrokenChartSurface {
    type Layer = ();

    fn draw_marker_layer(&mut self, _markers: Vec<Marker>) -> Result<(), RenderError> {
        self.layers += 1;
        Ok(())
    }

    fn remove_marker_layer(&mut self, _layer: ()) {
        self.layers -= 1;
    }
}

impl ChartSurface for BrokenChartSurface {
    type Chart = ();

    fn draw_bar_chart(
        &mut self,
        target: ChartTarget,
        _spec: ChartSpec,
    ) -> Result<(), RenderError> {
        Err(RenderError::TargetMissing(target.element_id()))
    }

    fn destroy_chart(&mut self, _chart: ()) {}
}

impl TextSurface for BrokenChartSurface {
    fn write_text(&mut self, _target: TextTarget, _value: &str) -> Result<(), RenderError> {
        self.texts_written += 1;
        Ok(())
    }
}

#[test]
fn test_chart_failure_aborts_remaining_renders_without_rollback() {
    let mut presenter = Presenter::new(BrokenChartSurface::default());

    let err = render_all(&mut presenter, REPORT).unwrap_err();
    assert!(err.to_string().contains("asnChart"));

    // The map rendered before the failure stays attached; nothing after the
    // failing chart ran
    let surface = presenter.surface();
    assert_eq!(surface.layers, 1);
    assert_eq!(surface.texts_written, 0);
}
