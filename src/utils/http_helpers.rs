use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

/// Header carrying the session id between a client and its accumulator.
pub const SESSION_HEADER: &str = "x-session-id";

/// A general purpose HTTP error type that can be converted into an `IntoResponse`.
pub struct HTTPError {
    status: StatusCode,
    message: String,
}

impl HTTPError {
    /// Creates a new HTTP error with the given status code and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        HTTPError {
            status,
            message: message.into(),
        }
    }
}

/// Converts our `HTTPError` into an HTTP response.
impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message }).to_string();
        Response::builder()
            .status(self.status)
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }
}

/// Parses the optional session id header. A present but malformed id is
/// a client error rather than a silent new session.
pub fn session_id_from_headers(headers: &HeaderMap) -> Result<Option<Uuid>, HTTPError> {
    match headers.get(SESSION_HEADER) {
        None => Ok(None),
        Some(value) => {
            let raw = value.to_str().map_err(|_| {
                HTTPError::new(StatusCode::BAD_REQUEST, "Invalid X-Session-Id header")
            })?;
            let id = Uuid::parse_str(raw).map_err(|_| {
                HTTPError::new(StatusCode::BAD_REQUEST, "Invalid X-Session-Id header")
            })?;
            Ok(Some(id))
        }
    }
}
