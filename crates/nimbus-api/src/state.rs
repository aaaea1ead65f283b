//! Application state shared across all handlers.

use std::sync::Arc;

use nimbus_core::config::AppConfig;
use nimbus_service::{FileService, FolderService, UploadService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// File operations service.
    pub file_service: Arc<FileService>,
    /// Folder creation service.
    pub folder_service: Arc<FolderService>,
    /// Upload service.
    pub upload_service: Arc<UploadService>,
}
