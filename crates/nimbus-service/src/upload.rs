//! Upload orchestration.

use std::sync::Arc;

use bytes::Bytes;
use futures::Stream;
use tracing::info;

use nimbus_core::error::AppError;
use nimbus_core::result::AppResult;
use nimbus_core::types::Entry;
use nimbus_storage::IngestionPipeline;

/// Drives the ingestion pipeline for incoming uploads.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Streaming ingestion pipeline.
    pipeline: Arc<IngestionPipeline>,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(pipeline: Arc<IngestionPipeline>) -> Self {
        Self { pipeline }
    }

    /// Stores one named byte stream into the target folder.
    ///
    /// Streams in a batch are independent: an earlier failure does not
    /// roll back files already written, and the caller reports outcomes
    /// per item.
    pub async fn store_stream<S>(
        &self,
        folder: &str,
        original_name: &str,
        stream: S,
    ) -> AppResult<Entry>
    where
        S: Stream<Item = Result<Bytes, AppError>> + Unpin,
    {
        if original_name.trim().is_empty() {
            return Err(AppError::invalid_argument("File name cannot be empty"));
        }

        let entry = self.pipeline.store(folder, original_name, stream).await?;
        info!(id = entry.id, name = entry.name, size = entry.size, "Upload stored");
        Ok(entry)
    }
}
