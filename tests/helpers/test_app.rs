use super::{setup_test_db, test_now, TEST_TOKEN};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use studydesk::bootstrap::build_app_state_with_clock;
use studydesk::config::Config;
use studydesk::infrastructure::http::router::build_router;
use studydesk::infrastructure::runtime::clock::FixedClock;
use tower::ServiceExt;

pub fn test_config(pairs: &[(&str, String)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned()).expect("valid test config")
}

/// Settings pointing the LMS at `lms_url` with the test token
pub fn lms_settings(lms_url: &str) -> Vec<(&'static str, String)> {
    vec![
        ("CANVAS_API_URL", lms_url.to_string()),
        ("CANVAS_API_KEY", TEST_TOKEN.to_string()),
        ("UPSTREAM_TIMEOUT_SECS", "5".to_string()),
    ]
}

/// Full router over a fresh database, with the clock frozen at `test_now()`
pub async fn test_app(config: &Config) -> Router {
    let db = setup_test_db().await;
    let state = build_app_state_with_clock(db, config, Arc::new(FixedClock::new(test_now())))
        .expect("Failed to build app state");
    build_router(state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    app.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("JSON body")
}
