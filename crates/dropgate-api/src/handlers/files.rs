use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use dropgate_core::models::{FileEntry, FilesResponse};
use std::sync::Arc;
use std::time::Duration;

/// List stored objects, each with a time-limited download URL.
///
/// A key whose URL cannot be signed is dropped from the result rather than
/// failing the whole listing. Ordering is whatever the backend returns.
#[tracing::instrument(skip(state), fields(operation = "list_files"))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let objects = state.storage.list().await.map_err(HttpAppError::from)?;

    let ttl = Duration::from_secs(state.config.download_url_ttl_secs());
    let mut files = Vec::with_capacity(objects.len());
    for object in objects {
        match state.storage.presigned_get_url(&object.key, ttl).await {
            Ok(url) => files.push(FileEntry {
                name: object.key,
                url,
                size: object.size,
                last_modified: object.last_modified,
            }),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    key = %object.key,
                    "Dropping object from listing; download URL issuance failed"
                );
            }
        }
    }

    Ok(Json(FilesResponse { files }))
}
