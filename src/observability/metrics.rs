//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lifecycle_init_total` (counter): init calls by outcome (ok, error, panic)
//! - `lifecycle_shutdown_total` (counter): shutdown calls by outcome
//! - `lifecycle_rollbacks_total` (counter): construct cycles rolled back
//! - `lifecycle_post_construct_total` (counter): post-construct notifications
//! - `lifecycle_live_components` (gauge): components currently initialized
//!
//! # Design Decisions
//! - Updates are no-ops until a recorder is installed
//! - Prometheus exporter is opt-in and owned by the runner binary

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder with an HTTP scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_init(outcome: &'static str) {
    ::metrics::counter!("lifecycle_init_total", "outcome" => outcome).increment(1);
}

pub fn record_shutdown(outcome: &'static str) {
    ::metrics::counter!("lifecycle_shutdown_total", "outcome" => outcome).increment(1);
}

pub fn record_rollback() {
    ::metrics::counter!("lifecycle_rollbacks_total").increment(1);
}

pub fn record_post_construct() {
    ::metrics::counter!("lifecycle_post_construct_total").increment(1);
}

pub fn set_live_components(count: usize) {
    ::metrics::gauge!("lifecycle_live_components").set(count as f64);
}
