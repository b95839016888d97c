mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_app, get_request, json_request, load_config};
use serde_json::json;
use tower::ServiceExt;

const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "warn"
  format: "json"
inference:
  type: "lexicon"
  name: "test lexicon"
bind_address: 127.0.0.1:8083
metrics:
  bind_address: 127.0.0.1:8084
"#;

#[tokio::test]
async fn test_prediction_feedback_lifecycle() {
    let (app, _config) = build_app(load_config(TEST_CONFIG));

    // Fresh session: the first prediction mints a session id.
    let response = app
        .clone()
        .oneshot(json_request(
            "/predict",
            Method::POST,
            None,
            &json!({ "text": "I love this!" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let session_id = response
        .headers()
        .get("x-session-id")
        .expect("predict should set a session id")
        .to_str()
        .unwrap()
        .to_string();
    let body = body_json(response).await;
    assert_eq!(body["label"], "POSITIVE");
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));
    assert_eq!(body["request_count"], 1);

    // First verdict is recorded.
    let response = app
        .clone()
        .oneshot(json_request(
            "/feedback",
            Method::POST,
            Some(&session_id),
            &json!({ "verdict": "yes" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["recorded"], true);
    assert_eq!(body["yes_count"], 1);
    assert_eq!(body["no_count"], 0);
    assert_eq!(body["accuracy"], 1.0);

    // A second verdict for the same prediction is a no-op.
    let response = app
        .clone()
        .oneshot(json_request(
            "/feedback",
            Method::POST,
            Some(&session_id),
            &json!({ "verdict": "no" }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["recorded"], false);
    assert_eq!(body["yes_count"], 1);
    assert_eq!(body["no_count"], 0);

    // A new prediction resets the guard.
    let response = app
        .clone()
        .oneshot(json_request(
            "/predict",
            Method::POST,
            Some(&session_id),
            &json!({ "text": "I hate this" }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["label"], "NEGATIVE");
    assert_eq!(body["request_count"], 2);

    let response = app
        .clone()
        .oneshot(json_request(
            "/feedback",
            Method::POST,
            Some(&session_id),
            &json!({ "verdict": "no" }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["recorded"], true);
    assert_eq!(body["yes_count"], 1);
    assert_eq!(body["no_count"], 1);
    assert_eq!(body["accuracy"], 0.5);

    // Stats expose the full timestamped history, oldest first.
    let response = app
        .clone()
        .oneshot(get_request("/stats", Some(&session_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["request_count"], 2);
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["correct"], 1);
    assert_eq!(history[1]["correct"], 0);
    let t0 = history[0]["timestamp"].as_f64().unwrap();
    let t1 = history[1]["timestamp"].as_f64().unwrap();
    assert!(t0 <= t1);
}

#[tokio::test]
async fn test_sessions_do_not_share_state() {
    let (app, _config) = build_app(load_config(TEST_CONFIG));

    let response = app
        .clone()
        .oneshot(json_request(
            "/predict",
            Method::POST,
            None,
            &json!({ "text": "great" }),
        ))
        .await
        .unwrap();
    let first_session = response
        .headers()
        .get("x-session-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "/predict",
            Method::POST,
            None,
            &json!({ "text": "awful" }),
        ))
        .await
        .unwrap();
    let second_session = response
        .headers()
        .get("x-session-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    assert_ne!(first_session, second_session);

    // Feedback in the first session leaves the second untouched.
    let response = app
        .clone()
        .oneshot(json_request(
            "/feedback",
            Method::POST,
            Some(&first_session),
            &json!({ "verdict": "yes" }),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["recorded"], true);

    let response = app
        .clone()
        .oneshot(get_request("/stats", Some(&second_session)))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["yes_count"], 0);
    assert_eq!(body["no_count"], 0);
    assert!(body["accuracy"].is_null());
}

#[tokio::test]
async fn test_feedback_requires_a_known_session() {
    let (app, _config) = build_app(load_config(TEST_CONFIG));

    let response = app
        .clone()
        .oneshot(json_request(
            "/feedback",
            Method::POST,
            None,
            &json!({ "verdict": "yes" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "/feedback",
            Method::POST,
            Some("00000000-0000-0000-0000-000000000000"),
            &json!({ "verdict": "yes" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(json_request(
            "/feedback",
            Method::POST,
            Some("not-a-uuid"),
            &json!({ "verdict": "yes" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats_requires_a_known_session() {
    let (app, _config) = build_app(load_config(TEST_CONFIG));

    let response = app
        .clone()
        .oneshot(get_request("/stats", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(get_request(
            "/stats",
            Some("00000000-0000-0000-0000-000000000000"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(get_request("/stats", Some("not-a-uuid")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_metrics_endpoint_reflects_traffic() {
    let (app, _config) = build_app(load_config(TEST_CONFIG));

    let response = app
        .clone()
        .oneshot(json_request(
            "/predict",
            Method::POST,
            None,
            &json!({ "text": "I love this!" }),
        ))
        .await
        .unwrap();
    let session_id = response
        .headers()
        .get("x-session-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    app.clone()
        .oneshot(json_request(
            "/feedback",
            Method::POST,
            Some(&session_id),
            &json!({ "verdict": "yes" }),
        ))
        .await
        .unwrap();

    let response = app.clone().oneshot(get_request("/metrics", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("ml_model_requests_total 1"));
    assert!(text.contains("ml_model_confidence_scores_count 1"));
    assert!(text.contains("ml_model_accuracy 1"));
}

#[tokio::test]
async fn test_health_check() {
    let (app, _config) = build_app(load_config(TEST_CONFIG));

    let response = app.oneshot(get_request("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
