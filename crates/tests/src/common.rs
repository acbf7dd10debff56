use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value;
use server::auth::DemoAuthenticator;
use shared_types::{demo_identity, Role, Session};
use tower::ServiceExt;

/// A session signed in as the canned identity for `role`.
pub fn signed_in(role: Role) -> Session {
    let mut session = Session::anonymous();
    session.sign_in(demo_identity(role));
    session
}

/// Demo authenticator that resolves immediately to `role`.
pub fn instant_authenticator(role: Role) -> DemoAuthenticator {
    DemoAuthenticator::new(Duration::ZERO, role)
}

/// The plain axum routes mounted beside the Dioxus app.
pub fn health_router() -> Router {
    Router::new().route("/health", get(server::health::health_check))
}

/// GET a route and parse the JSON response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}
