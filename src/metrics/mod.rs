//! Metrics collection for observability

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_counter_with_registry, Counter, CounterVec,
    Opts, Registry,
};
use std::sync::Arc;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> =
    Lazy::new(|| Arc::new(Metrics::new().expect("Failed to initialize metrics")));

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    // Fact source metrics
    pub source_requests: CounterVec,
    pub facts_fetched: Counter,

    // Classification metrics
    pub facts_classified: Counter,
    pub facts_unclassified: Counter,

    // Record store metrics
    pub records_written: Counter,
    pub records_rejected: Counter,
    pub store_fetches: Counter,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let source_requests = register_counter_vec_with_registry!(
            Opts::new("source_requests_total", "Fact source requests by status"),
            &["status"],
            registry
        )?;

        let facts_fetched = register_counter_with_registry!(
            Opts::new("facts_fetched_total", "Facts received from the fact source"),
            registry
        )?;

        let facts_classified = register_counter_with_registry!(
            Opts::new("facts_classified_total", "Facts placed in the topic hierarchy"),
            registry
        )?;

        let facts_unclassified = register_counter_with_registry!(
            Opts::new(
                "facts_unclassified_total",
                "Facts that matched no topic and were skipped"
            ),
            registry
        )?;

        let records_written = register_counter_with_registry!(
            Opts::new("records_written_total", "Node records persisted to the store"),
            registry
        )?;

        let records_rejected = register_counter_with_registry!(
            Opts::new(
                "records_rejected_total",
                "Node records rejected during batch writes"
            ),
            registry
        )?;

        let store_fetches = register_counter_with_registry!(
            Opts::new("store_fetches_total", "Record store fetch operations"),
            registry
        )?;

        Ok(Self {
            registry,
            source_requests,
            facts_fetched,
            facts_classified,
            facts_unclassified,
            records_written,
            records_rejected,
            store_fetches,
        })
    }

    /// Render all registered metrics in the prometheus text format
    pub fn gather(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buffer) {
            tracing::error!("Failed to encode metrics: {}", e);
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
