//! Standalone metrics exporter.
//!
//! Serves the Prometheus text endpoint on its own well-known port so
//! scrapers do not need access to the main API. A port that is already
//! bound means another instance in this process is exporting already,
//! so that case is logged and swallowed rather than treated as fatal.

use axum::{http::StatusCode, routing::get, Router};
use std::io::ErrorKind;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::Metrics;

/// Serves `/metrics` on the given address until the process exits.
///
/// # Errors
///
/// Returns an error for any I/O failure other than the bind address
/// being in use, which is treated as "exporter already running".
pub async fn serve_exporter(metrics: Metrics, bind_address: String) -> std::io::Result<()> {
    let app = Router::new().route(
        "/metrics",
        get(move || {
            let metrics = metrics.clone();
            async move {
                (
                    StatusCode::OK,
                    [("Content-Type", "text/plain; version=0.0.4; charset=utf-8")],
                    metrics.render(),
                )
            }
        }),
    );

    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            warn!(
                "Metrics exporter port {} already in use, assuming exporter is running",
                bind_address
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    info!("Metrics exporter listening on {}", bind_address);
    axum::serve(listener, app).await
}
