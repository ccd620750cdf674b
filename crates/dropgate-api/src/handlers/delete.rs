use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use dropgate_core::models::{DeleteFileRequest, MessageResponse};
use dropgate_core::AppError;
use std::sync::Arc;

/// Delete an object by key.
///
/// The corresponding uploads row, if any, is left in place: the audit log is
/// insert-only.
#[tracing::instrument(
    skip(state, request),
    fields(filename = %request.filename, operation = "delete_file")
)]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<DeleteFileRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if request.filename.is_empty() {
        return Err(AppError::InvalidInput("Filename is required".to_string()).into());
    }

    state
        .storage
        .delete(&request.filename)
        .await
        .map_err(HttpAppError::from)?;

    tracing::info!(filename = %request.filename, "Object deleted");

    Ok(Json(MessageResponse {
        message: format!("{} deleted successfully", request.filename),
    }))
}
