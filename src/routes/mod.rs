//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! prediction, feedback, session statistics, health checks, and
//! metrics exposition.

mod feedback_routes;
mod health_routes;
mod metrics_routes;
mod predict_routes;
mod stats_routes;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
///
/// Combines all route modules into a single router and attaches
/// the application state for access in handlers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(predict_routes::routes())
        .merge(feedback_routes::routes())
        .merge(stats_routes::routes())
        .merge(health_routes::routes())
        .merge(metrics_routes::routes())
        .with_state(state)
}
