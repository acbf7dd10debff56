use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn health_endpoint_reports_ok() {
    server::health::record_start_time();
    let app = common::health_router();

    let (status, body) = common::get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = common::health_router();
    let (status, _) = common::get_json(&app, "/healthz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
