//! Health handlers and response types.

use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use dropgate_core::models::ServiceInfo;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Run an async check with timeout; returns "healthy", "timeout", or "{prefix}: {error}".
async fn run_check<F, E>(timeout: Duration, f: F, error_prefix: &str) -> String
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => format!("{}: {}", error_prefix, e),
        Err(_) => "timeout".to_string(),
    }
}

/// Root payload: service status plus the storage target it brokers for.
pub async fn service_info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ServiceInfo {
        status: "ok".to_string(),
        bucket: state.config.s3_bucket().to_string(),
        region: state.config.aws_region().to_string(),
    })
}

/// Health probe. Always 200: the metadata store is advisory, so a degraded
/// database is reported in the body without making the service appear down.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let uploads = state.uploads.clone();
    let database = run_check(TIMEOUT, async move { uploads.probe().await }, "degraded").await;

    Json(serde_json::json!({
        "status": "ok",
        "database": database,
    }))
}
