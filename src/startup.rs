//! Application startup and server initialization.
//!
//! Builds the inference collaborator and session store, spawns the
//! dedicated metrics exporter, and starts the HTTP server with the
//! configured routes.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ConfigV1;
use crate::inference::create_inference_provider;
use crate::metrics::{self, Metrics};
use crate::routes;
use crate::session::SessionStore;
use crate::state::AppState;

/// Initializes and runs the application server.
///
/// Sets up the inference provider and session store, spawns the metrics
/// exporter on its own port, then binds to the address specified in the
/// configuration and starts serving requests.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the specified address
/// or encounters a runtime error during execution. A metrics exporter
/// port that is already in use is not an error; the exporter is treated
/// as already running.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let inference = create_inference_provider(&config.inference);
    let sessions = Arc::new(SessionStore::new());
    let metrics = Metrics::global();

    let exporter_metrics = metrics.clone();
    let exporter_address = config.metrics.bind_address.clone();
    tokio::spawn(async move {
        if let Err(e) = metrics::serve_exporter(exporter_metrics, exporter_address).await {
            error!("Metrics exporter failed: {}", e);
        }
    });

    info!("Starting server on {}", config.bind_address);

    let state = AppState {
        config: config.clone(),
        inference: Arc::from(inference),
        sessions,
        metrics,
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.bind_address).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
