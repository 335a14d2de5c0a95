//! Dashboard endpoint handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::DashboardState;

/// JSON snapshot of the last completed load.
pub async fn status_handler(State(state): State<DashboardState>) -> Response {
    let json = match serde_json::to_string_pretty(state.snapshot.as_ref()) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize status: {}", e),
            )
                .into_response();
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], json).into_response()
}

/// Prometheus-compatible metrics endpoint.
pub async fn metrics_handler(State(state): State<DashboardState>) -> Response {
    let snapshot = state.snapshot.as_ref();

    let mut metrics = format!(
        r#"# HELP honeypot_total_attempts Total connection attempts across all records
# TYPE honeypot_total_attempts gauge
honeypot_total_attempts {}

# HELP honeypot_unique_sources Distinct source addresses seen
# TYPE honeypot_unique_sources gauge
honeypot_unique_sources {}

# HELP honeypot_records Parsed attack records in the last report
# TYPE honeypot_records gauge
honeypot_records {}

# HELP honeypot_markers_rendered Markers drawn on the attack map
# TYPE honeypot_markers_rendered gauge
honeypot_markers_rendered {}
"#,
        snapshot.totals.total_attempts,
        snapshot.totals.unique_sources,
        snapshot.record_count,
        snapshot.markers_rendered,
    );

    metrics.push_str(
        "\n# HELP honeypot_network_attempts Attempts per origin network (top 10)\n# TYPE honeypot_network_attempts gauge\n",
    );
    for entry in &snapshot.top_networks {
        metrics.push_str(&format!(
            "honeypot_network_attempts{{asn=\"{}\"}} {}\n",
            entry.key, entry.attempts
        ));
    }

    metrics.push_str(
        "\n# HELP honeypot_country_attempts Attempts per country (top 10)\n# TYPE honeypot_country_attempts gauge\n",
    );
    for entry in &snapshot.top_countries {
        metrics.push_str(&format!(
            "honeypot_country_attempts{{country=\"{}\"}} {}\n",
            entry.key, entry.attempts
        ));
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        metrics,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{RankedEntry, TrafficTotals};
    use crate::status_server::types::DashboardSnapshot;
    use std::sync::Arc;

    fn test_state() -> DashboardState {
        DashboardState {
            snapshot: Arc::new(DashboardSnapshot {
                loaded_at_ms: 1_756_000_000_000,
                record_count: 2,
                markers_rendered: 2,
                totals: TrafficTotals {
                    total_attempts: 8,
                    unique_sources: 2,
                },
                top_networks: vec![RankedEntry {
                    key: "999".to_string(),
                    attempts: 8,
                }],
                top_countries: vec![
                    RankedEntry {
                        key: "US".to_string(),
                        attempts: 5,
                    },
                    RankedEntry {
                        key: "CA".to_string(),
                        attempts: 3,
                    },
                ],
            }),
        }
    }

    #[tokio::test]
    async fn test_status_handler_serializes_snapshot() {
        let response = status_handler(State(test_state())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["totals"]["total_attempts"], 8);
        assert_eq!(json["totals"]["unique_sources"], 2);
        assert_eq!(json["top_networks"][0]["key"], "999");
        assert_eq!(json["top_countries"][1]["attempts"], 3);
    }

    #[tokio::test]
    async fn test_metrics_handler_prometheus_format() {
        let response = metrics_handler(State(test_state())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("honeypot_total_attempts 8"));
        assert!(text.contains("honeypot_unique_sources 2"));
        assert!(text.contains("honeypot_network_attempts{asn=\"999\"} 8"));
        assert!(text.contains("honeypot_country_attempts{country=\"US\"} 5"));
    }
}
