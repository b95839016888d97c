use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use sentiboard::config::{Config, ConfigV1};
use sentiboard::inference::create_inference_provider;
use sentiboard::metrics::Metrics;
use sentiboard::routes::create_router;
use sentiboard::session::SessionStore;
use sentiboard::state::AppState;
use serde_json::Value;

pub fn load_config(yaml: &str) -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(yaml))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

pub fn build_app(config: ConfigV1) -> (Router, Arc<ConfigV1>) {
    let config = Arc::new(config);
    let inference = create_inference_provider(&config.inference);

    let state = AppState {
        config: config.clone(),
        inference: Arc::from(inference),
        sessions: Arc::new(SessionStore::new()),
        metrics: Metrics::new(),
    };

    (create_router(state), config)
}

pub fn json_request(
    path: &str,
    method: Method,
    session_id: Option<&str>,
    body: &Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json");

    if let Some(id) = session_id {
        builder = builder.header("X-Session-Id", id);
    }

    builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn get_request(path: &str, session_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(path);

    if let Some(id) = session_id {
        builder = builder.header("X-Session-Id", id);
    }

    builder
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
