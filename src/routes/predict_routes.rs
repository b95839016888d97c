//! Prediction endpoint handlers.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::post, Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::state::AppState;
use crate::utils::http_helpers::{session_id_from_headers, HTTPError, SESSION_HEADER};

/// Registers prediction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}

#[derive(Deserialize)]
struct PredictRequest {
    text: String,
}

/// Runs one sentiment prediction for the caller's session.
///
/// A missing or unknown session id creates a fresh session; the id is
/// echoed back in the `X-Session-Id` response header. Inference failures
/// surface as 502 with the collaborator's message unmodified.
async fn predict(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PredictRequest>,
) -> Result<impl IntoResponse, HTTPError> {
    let session_id = session_id_from_headers(&headers)?;
    let (session_id, session) = state.sessions.get_or_create(session_id);

    let mut accumulator = session.lock().await;
    let prediction = accumulator
        .submit_prediction(&request.text, state.inference.as_ref(), &state.metrics)
        .await
        .map_err(|e| HTTPError::new(StatusCode::BAD_GATEWAY, e))?;

    info!(
        "Session {} prediction #{}: {:?} ({:.2})",
        session_id,
        accumulator.request_count(),
        prediction.label,
        prediction.confidence
    );

    Ok((
        [(SESSION_HEADER, session_id.to_string())],
        Json(json!({
            "label": prediction.label,
            "confidence": prediction.confidence,
            "emoji": prediction.emoji,
            "request_count": accumulator.request_count(),
        })),
    ))
}
