//! Folder creation handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::CreateFolderResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<CreateFolderResponse>, ApiError> {
    let parent = req.parent.as_deref().unwrap_or("root");
    let folder = state.folder_service.create(parent, &req.name).await?;
    Ok(Json(CreateFolderResponse {
        success: true,
        folder,
    }))
}
