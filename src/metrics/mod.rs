//! Metrics collection and exposition for Prometheus.
//!
//! This module provides centralized metrics recording and the
//! standalone exporter endpoint.

mod exporter;
mod recorder;

pub use exporter::serve_exporter;
pub use recorder::{Metrics, MetricsRecorder};
