//! Session statistics endpoint.
//!
//! Returns the data behind the dashboard's accuracy-trend and
//! yes/no-count views.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;
use crate::utils::http_helpers::{session_id_from_headers, HTTPError};

/// Registers statistics routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}

/// Reports the session's counters, running accuracy, and full
/// timestamped feedback history. Pure read.
async fn stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HTTPError> {
    let session_id = session_id_from_headers(&headers)?
        .ok_or_else(|| HTTPError::new(StatusCode::BAD_REQUEST, "Missing X-Session-Id header"))?;
    let session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| HTTPError::new(StatusCode::NOT_FOUND, "Unknown session"))?;

    let accumulator = session.lock().await;
    let history: Vec<_> = accumulator
        .accuracy_history()
        .iter()
        .map(|(timestamp, correct)| json!({ "timestamp": timestamp, "correct": correct }))
        .collect();

    Ok(Json(json!({
        "request_count": accumulator.request_count(),
        "yes_count": accumulator.yes_count(),
        "no_count": accumulator.no_count(),
        "accuracy": accumulator.running_accuracy(),
        "history": history,
    })))
}
