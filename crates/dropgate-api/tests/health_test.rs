//! Service-info and health endpoint integration tests.
//!
//! Run with: `cargo test -p dropgate-api --test health_test`

mod helpers;

use helpers::setup_test_app;
use serde_json::Value;

#[tokio::test]
async fn test_root_reports_service_info() {
    let app = setup_test_app();

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["bucket"], "test-bucket");
    assert_eq!(body["region"], "us-east-1");
}

#[tokio::test]
async fn test_health_is_200_with_degraded_database() {
    // The metadata store is advisory: its unavailability is reported in the
    // body, not as an unhealthy service.
    let app = setup_test_app();

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    let database = body["database"].as_str().expect("database field");
    assert_ne!(database, "healthy");
}
