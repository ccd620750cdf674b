use crate::error::{HttpAppError, ValidatedJson};
use crate::handlers::RECORD_TIMEOUT;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use dropgate_core::models::{UploadUrlRequest, UploadUrlResponse, DEFAULT_CONTENT_TYPE};
use dropgate_core::AppError;
use std::sync::Arc;
use std::time::Duration;

/// Generate a presigned URL for a direct bucket upload.
///
/// Validation happens before any backend call. The metadata record is
/// best-effort: its outcome is logged and never surfaced to the caller.
#[tracing::instrument(
    skip(state, request),
    fields(filename = %request.filename, operation = "generate_upload_url")
)]
pub async fn generate_upload_url(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UploadUrlRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if request.filename.is_empty() {
        return Err(AppError::InvalidInput("Filename is required".to_string()).into());
    }
    if !state.validator.is_allowed(&request.filename) {
        return Err(AppError::InvalidInput("File type not allowed".to_string()).into());
    }

    let content_type = request
        .content_type
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    let url = state
        .storage
        .presigned_put_url(
            &request.filename,
            &content_type,
            Duration::from_secs(state.config.upload_url_ttl_secs()),
        )
        .await
        .map_err(HttpAppError::from)?;

    match tokio::time::timeout(
        RECORD_TIMEOUT,
        state.uploads.record(&request.filename, &content_type),
    )
    .await
    {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            tracing::warn!(
                error = %e,
                filename = %request.filename,
                "Upload metadata not recorded"
            );
        }
        Err(_) => {
            tracing::warn!(
                filename = %request.filename,
                "Upload metadata recording timed out"
            );
        }
    }

    tracing::info!(
        filename = %request.filename,
        content_type = %content_type,
        "Issued upload URL"
    );

    Ok(Json(UploadUrlResponse {
        url,
        filename: request.filename,
    }))
}
