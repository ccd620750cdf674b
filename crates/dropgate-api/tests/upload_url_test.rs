//! Upload-URL endpoint integration tests.
//!
//! Run with: `cargo test -p dropgate-api --test upload_url_test`

mod helpers;

use helpers::store::MockStore;
use helpers::{setup_test_app, setup_test_app_with};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::time::Duration;

#[tokio::test]
async fn test_empty_filename_rejected() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/generate-upload-url")
        .json(&json!({ "filename": "" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["error"], "Filename is required");
    // Validation fails before any signing is attempted.
    assert!(app.store.issued_urls().is_empty());
}

#[tokio::test]
async fn test_disallowed_extension_rejected() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/generate-upload-url")
        .json(&json!({ "filename": "notes.txt" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["error"], "File type not allowed");
    assert!(app.store.issued_urls().is_empty());
}

#[tokio::test]
async fn test_upload_url_issued_with_content_type() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/generate-upload-url")
        .json(&json!({ "filename": "photo.JPG", "contentType": "image/jpeg" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["filename"], "photo.JPG");
    assert!(body["url"].as_str().expect("url").contains("photo.JPG"));

    let issued = app.store.issued_urls();
    assert_eq!(issued.len(), 1);
    assert_eq!(issued[0].key, "photo.JPG");
    assert_eq!(issued[0].content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(issued[0].expires_in, Duration::from_secs(300));
}

#[tokio::test]
async fn test_content_type_defaults_to_octet_stream() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/generate-upload-url")
        .json(&json!({ "filename": "clip.webm" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let issued = app.store.issued_urls();
    assert_eq!(
        issued[0].content_type.as_deref(),
        Some("application/octet-stream")
    );
}

#[tokio::test]
async fn test_metadata_store_down_does_not_fail_upload_url() {
    // The helper pool points at an unreachable address; the recorder fails on
    // every call. The endpoint must still return the URL.
    let app = setup_test_app();

    let response = app
        .server
        .post("/generate-upload-url")
        .json(&json!({ "filename": "photo.jpg", "contentType": "image/jpeg" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert!(body["url"].as_str().expect("url").contains("photo.jpg"));
}

#[tokio::test]
async fn test_signing_failure_is_500() {
    let store = MockStore {
        fail_sign_keys: HashSet::from(["photo.jpg".to_string()]),
        ..Default::default()
    };
    let app = setup_test_app_with(store);

    let response = app
        .server
        .post("/generate-upload-url")
        .json(&json!({ "filename": "photo.jpg" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["code"], "STORAGE_ERROR");
}

#[tokio::test]
async fn test_malformed_body_is_400_in_standard_shape() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/generate-upload-url")
        .content_type("application/json")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}
