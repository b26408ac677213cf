//! Metrics collection and exposition.
//!
//! # Metrics
//! - `intake_requests_total` (counter): processed requests by method, status
//! - `intake_records_total` (counter): classified device records by kind
//! - `intake_request_duration_seconds` (histogram): handling latency
//!
//! Recording is a no-op until [`init_metrics`] installs the Prometheus
//! recorder, so handlers call these unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter and describe the intake metrics.
pub fn init_metrics(addr: SocketAddr) {
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::error!(error = %e, "Failed to install metrics exporter");
        return;
    }

    metrics::describe_counter!(
        "intake_requests_total",
        "Processed intake requests by method and status"
    );
    metrics::describe_counter!("intake_records_total", "Classified device records by kind");
    metrics::describe_histogram!(
        "intake_request_duration_seconds",
        "Intake request handling latency"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "intake_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("intake_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record one classified record by kind.
pub fn record_classified(kind: &'static str) {
    metrics::counter!("intake_records_total", "kind" => kind).increment(1);
}
