use crate::error::{HttpAppError, ValidatedJson};
use crate::handlers::RECORD_TIMEOUT;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use dropgate_core::models::{MessageResponse, SaveFileInfoRequest, DEFAULT_CONTENT_TYPE};
use dropgate_core::AppError;
use std::sync::Arc;

/// Record upload metadata without issuing a URL.
///
/// A recorder failure is reported in the message body, never as an HTTP
/// error: the metadata store is advisory.
#[tracing::instrument(
    skip(state, request),
    fields(filename = %request.filename, operation = "save_file_info")
)]
pub async fn save_file_info(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<SaveFileInfoRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if request.filename.is_empty() {
        return Err(AppError::InvalidInput("Filename is required".to_string()).into());
    }

    let content_type = request
        .content_type
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    let outcome = tokio::time::timeout(
        RECORD_TIMEOUT,
        state.uploads.record(&request.filename, &content_type),
    )
    .await;

    let message = match outcome {
        Ok(Ok(())) => format!("File \"{}\" info saved successfully", request.filename),
        Ok(Err(e)) => {
            tracing::warn!(
                error = %e,
                filename = %request.filename,
                "File info not recorded"
            );
            format!(
                "File \"{}\" accepted; metadata was not persisted",
                request.filename
            )
        }
        Err(_) => {
            tracing::warn!(
                filename = %request.filename,
                "File info recording timed out"
            );
            format!(
                "File \"{}\" accepted; metadata was not persisted",
                request.filename
            )
        }
    };

    Ok(Json(MessageResponse { message }))
}
