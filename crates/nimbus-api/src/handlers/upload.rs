//! Multipart upload handler.

use axum::Json;
use axum::extract::State;
use axum::extract::multipart::{Field, Multipart};
use bytes::Bytes;
use futures::Stream;
use tracing::warn;

use nimbus_core::error::AppError;

use crate::dto::response::{UploadFailure, UploadResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/upload
///
/// Multipart form: an optional `folder` text field (applies to the file
/// fields that follow it; defaults to the root) and one or more `files`
/// fields. Streams are stored independently: a failure neither aborts the
/// batch nor rolls back files already written, and the response reports
/// the outcome per item. Zero file fields is a client error.
pub async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut folder = "root".to_string();
    let mut stored = Vec::new();
    let mut failed: Vec<(String, AppError)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_argument(format!("Multipart error: {e}")))?
    {
        match field.name().unwrap_or("") {
            "folder" => {
                folder = field
                    .text()
                    .await
                    .map_err(|e| AppError::invalid_argument(format!("Multipart error: {e}")))?;
            }
            "files" => {
                let name = field.file_name().unwrap_or("").to_string();
                let stream = Box::pin(field_stream(field));
                match state
                    .upload_service
                    .store_stream(&folder, &name, stream)
                    .await
                {
                    Ok(entry) => stored.push(entry),
                    Err(e) => {
                        warn!(name, error = %e, "Upload item failed");
                        failed.push((name, e));
                    }
                }
            }
            other => {
                warn!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    if stored.is_empty() && failed.is_empty() {
        return Err(AppError::invalid_argument("No files uploaded").into());
    }

    // A batch where nothing was stored is an error, not an empty success;
    // the first failure carries the most useful kind (e.g. PayloadTooLarge).
    if stored.is_empty() {
        let (_, first) = failed.swap_remove(0);
        return Err(first.into());
    }

    let count = stored.len();
    let failed: Vec<UploadFailure> = failed
        .into_iter()
        .map(|(name, e)| UploadFailure {
            name,
            error: e.kind.to_string(),
            message: e.message,
        })
        .collect();

    Ok(Json(UploadResponse {
        success: failed.is_empty(),
        files: stored,
        failed,
        count,
        message: format!("Successfully uploaded {count} file(s)"),
    }))
}

/// Adapt a multipart field into a fallible byte stream for the pipeline.
fn field_stream(field: Field<'_>) -> impl Stream<Item = Result<Bytes, AppError>> + '_ {
    futures::stream::try_unfold(field, |mut field| async move {
        match field.chunk().await {
            Ok(Some(chunk)) => Ok(Some((chunk, field))),
            Ok(None) => Ok(None),
            Err(e) => Err(AppError::invalid_argument(format!(
                "Multipart read error: {e}"
            ))),
        }
    })
}
