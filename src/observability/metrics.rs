//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): inbound API/page requests by capability, status
//! - `gateway_upstream_requests_total` (counter): upstream calls by capability, outcome
//! - `gateway_upstream_duration_seconds` (histogram): upstream latency
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::gateway::Capability;

/// Install the Prometheus recorder and its scrape listener.
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one inbound request for a capability.
pub fn record_request(capability: Capability, route: &'static str, status: u16) {
    metrics::counter!(
        "gateway_requests_total",
        "capability" => capability.name(),
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record one upstream call. `outcome` is the HTTP status or `"error"`.
pub fn record_upstream(capability: Capability, outcome: &str, start: Instant) {
    metrics::counter!(
        "gateway_upstream_requests_total",
        "capability" => capability.name(),
        "outcome" => outcome.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "gateway_upstream_duration_seconds",
        "capability" => capability.name()
    )
    .record(start.elapsed().as_secs_f64());
}
