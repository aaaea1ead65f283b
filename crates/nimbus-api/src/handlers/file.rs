//! Listing, info, download, rename, and delete handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use tokio_util::io::ReaderStream;

use nimbus_core::error::AppError;
use nimbus_core::types::Entry;

use crate::dto::request::{ListParams, RenameRequest};
use crate::dto::response::{ListResponse, MessageResponse, RenameResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/files?folder=
pub async fn list_files(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let folder = params.folder.as_deref().unwrap_or("root");
    let files = state.file_service.list(folder).await?;
    Ok(Json(ListResponse { files }))
}

/// GET /api/files/{id}/info
pub async fn file_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    let entry = state.file_service.info(&id).await?;
    Ok(Json(entry))
}

/// GET /api/download/{id}
///
/// Streams the file body; the display name is reported via
/// Content-Disposition. Reads are never destructive, so a client
/// disconnect mid-stream simply drops the handle.
pub async fn download_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let (entry, file) = state.file_service.download(&id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", entry.name),
        )
        .header(header::CONTENT_LENGTH, entry.size)
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// PUT /api/files/{id}/rename
pub async fn rename_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<RenameResponse>, ApiError> {
    let new_id = state.file_service.rename(&id, &req.name).await?;
    Ok(Json(RenameResponse {
        success: true,
        new_id,
    }))
}

/// DELETE /api/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.file_service.delete(&id).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Entry deleted".to_string(),
    }))
}
