//! Application builder — wires storage, services, and router together.

use std::sync::Arc;

use nimbus_core::config::AppConfig;
use nimbus_core::error::AppError;
use nimbus_core::result::AppResult;
use nimbus_service::{FileService, FolderService, UploadService};
use nimbus_storage::{IngestionPipeline, TreeStore};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the shared application state, creating the storage root if
/// it does not exist yet.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let tree = Arc::new(TreeStore::new(&config.storage.root_path).await?);
    let pipeline = Arc::new(IngestionPipeline::new(
        Arc::clone(&tree),
        config.storage.max_upload_size_bytes,
    ));

    Ok(AppState {
        config: Arc::new(config),
        file_service: Arc::new(FileService::new(Arc::clone(&tree))),
        folder_service: Arc::new(FolderService::new(Arc::clone(&tree))),
        upload_service: Arc::new(UploadService::new(pipeline)),
    })
}

/// Runs the Nimbus Drive server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let root = config.storage.root_path.clone();

    let state = build_state(config).await?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, storage_root = %root, "Nimbus Drive server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
