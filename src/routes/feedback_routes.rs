//! Feedback endpoint handlers.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::post, Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::models::Verdict;
use crate::state::AppState;
use crate::utils::http_helpers::{session_id_from_headers, HTTPError};

/// Registers feedback routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/feedback", post(feedback))
}

#[derive(Deserialize)]
struct FeedbackRequest {
    verdict: Verdict,
}

/// Records a yes/no verdict for the session's current prediction.
///
/// Requires a known session id: feedback can never precede a prediction,
/// so there is nothing to create here. Duplicate feedback for the same
/// prediction leaves the state untouched and reports `recorded: false`.
async fn feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<FeedbackRequest>,
) -> Result<impl IntoResponse, HTTPError> {
    let session_id = session_id_from_headers(&headers)?
        .ok_or_else(|| HTTPError::new(StatusCode::BAD_REQUEST, "Missing X-Session-Id header"))?;
    let session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| HTTPError::new(StatusCode::NOT_FOUND, "Unknown session"))?;

    let mut accumulator = session.lock().await;
    let recorded = accumulator.submit_feedback(request.verdict, &state.metrics);
    if !recorded {
        debug!("Session {} feedback ignored by the duplicate guard", session_id);
    }

    Ok(Json(json!({
        "recorded": recorded,
        "yes_count": accumulator.yes_count(),
        "no_count": accumulator.no_count(),
        "accuracy": accumulator.running_accuracy(),
    })))
}
