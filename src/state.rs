//! Shared application state.
//!
//! Contains the state that is shared across all request handlers:
//! configuration, the inference collaborator, the session store, and
//! the metrics handle.

use crate::config::ConfigV1;
use crate::inference::Inference;
use crate::metrics::Metrics;
use crate::session::SessionStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request handler. Sessions are isolated from each other;
/// the metrics handle is the one process-wide sink.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// The inference collaborator producing sentiment predictions.
    pub inference: Arc<dyn Inference>,
    /// Per-session feedback accumulators, keyed by session id.
    pub sessions: Arc<SessionStore>,
    /// Prometheus metrics handle.
    pub metrics: Metrics,
}
