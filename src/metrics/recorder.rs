//! Metrics recording implementation using Prometheus.

use prometheus::{
    register_counter_with_registry, register_gauge_with_registry,
    register_histogram_with_registry, Counter, Encoder, Gauge, Histogram, Opts, Registry,
    TextEncoder,
};
use std::sync::{Arc, OnceLock};

/// Trait for recording application metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Records one prediction request.
    fn record_request(&self);

    /// Records the model confidence reported for one prediction.
    fn record_confidence(&self, confidence: f64);

    /// Records the current running accuracy. Last value wins.
    fn record_accuracy(&self, accuracy: f64);
}

/// Prometheus metrics collector.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    requests_total: Counter,
    confidence_scores: Histogram,
    accuracy: Gauge,
}

static GLOBAL_METRICS: OnceLock<Metrics> = OnceLock::new();

impl Metrics {
    /// Creates a new metrics instance with its own Prometheus registry.
    pub fn new() -> Self {
        let registry = Arc::new(Registry::new());

        let requests_total = register_counter_with_registry!(
            Opts::new(
                "ml_model_requests_total",
                "Total number of prediction requests"
            ),
            registry.clone()
        )
        .expect("Failed to register ml_model_requests_total");

        let confidence_scores = register_histogram_with_registry!(
            "ml_model_confidence_scores",
            "Distribution of model confidence scores",
            vec![0.5, 0.6, 0.7, 0.8, 0.9, 1.0],
            registry.clone()
        )
        .expect("Failed to register ml_model_confidence_scores");

        let accuracy = register_gauge_with_registry!(
            Opts::new("ml_model_accuracy", "User-reported model accuracy"),
            registry.clone()
        )
        .expect("Failed to register ml_model_accuracy");

        Metrics {
            registry,
            requests_total,
            confidence_scores,
            accuracy,
        }
    }

    /// Returns the process-wide metrics handle, created on first use.
    ///
    /// Registration against the underlying registry happens exactly once
    /// per process no matter how many sessions start; sessions receive
    /// this handle by injection rather than looking it up themselves.
    pub fn global() -> Metrics {
        GLOBAL_METRICS.get_or_init(Metrics::new).clone()
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .expect("Failed to encode metrics");
        String::from_utf8(buffer).expect("Metrics encoding produced invalid UTF-8")
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new()
    }
}

impl MetricsRecorder for Metrics {
    fn record_request(&self) {
        self.requests_total.inc();
    }

    fn record_confidence(&self, confidence: f64) {
        self.confidence_scores.observe(confidence);
    }

    fn record_accuracy(&self, accuracy: f64) {
        self.accuracy.set(accuracy);
    }
}
