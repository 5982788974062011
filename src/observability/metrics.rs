//! Metrics collection and exposition.
//!
//! # Metrics
//! - `default_backend_responses_total` (counter): responses by code
//! - `default_backend_body_loads_total` (counter): store loads by body source
//! - `default_backend_cache_lookups_total` (counter): cache lookups by result
//! - `default_backend_cache_entries` (gauge): cached bodies
//!
//! # Design Decisions
//! - Recording is always on; without an installed recorder it is a no-op
//! - The Prometheus endpoint is opt-in

use std::net::SocketAddr;
use std::sync::Once;

use metrics::{counter, describe_counter, describe_gauge, gauge, Unit};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const RESPONSES_TOTAL: &str = "default_backend_responses_total";
pub const BODY_LOADS_TOTAL: &str = "default_backend_body_loads_total";
pub const CACHE_LOOKUPS_TOTAL: &str = "default_backend_cache_lookups_total";
pub const CACHE_ENTRIES: &str = "default_backend_cache_entries";

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    describe_metrics();
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            RESPONSES_TOTAL,
            Unit::Count,
            "Error responses served, by status code."
        );
        describe_counter!(
            BODY_LOADS_TOTAL,
            Unit::Count,
            "Bodies read from the page store, by exact, class or default source."
        );
        describe_counter!(
            CACHE_LOOKUPS_TOTAL,
            Unit::Count,
            "Response cache lookups, by hit or miss."
        );
        describe_gauge!(CACHE_ENTRIES, Unit::Count, "Bodies held in the response cache.");
    });
}

/// Record one served error response.
pub fn record_response(code: u32) {
    counter!(RESPONSES_TOTAL, "code" => code.to_string()).increment(1);
}

/// Record where a freshly loaded body came from.
pub fn record_body_source(source: &'static str) {
    counter!(BODY_LOADS_TOTAL, "source" => source).increment(1);
}

pub fn record_cache_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    counter!(CACHE_LOOKUPS_TOTAL, "result" => result).increment(1);
}

pub fn record_cache_size(len: usize) {
    gauge!(CACHE_ENTRIES).set(len as f64);
}
