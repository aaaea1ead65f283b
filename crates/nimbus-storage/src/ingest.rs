//! Turns incoming byte streams into stored files.

use std::sync::Arc;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use nimbus_core::error::{AppError, ErrorKind};
use nimbus_core::result::AppResult;
use nimbus_core::types::Entry;

use crate::metadata::{derive_entry, kind_for_name};
use crate::naming::allocate_physical_name;
use crate::tree::TreeStore;

/// Streams uploads into the tree under allocated physical names.
#[derive(Debug, Clone)]
pub struct IngestionPipeline {
    /// Tree store owning the physical hierarchy.
    tree: Arc<TreeStore>,
    /// Per-stream byte ceiling.
    max_bytes: u64,
}

impl IngestionPipeline {
    /// Create a pipeline writing into the given tree with a per-stream
    /// size ceiling.
    pub fn new(tree: Arc<TreeStore>, max_bytes: u64) -> Self {
        Self { tree, max_bytes }
    }

    /// The configured per-stream byte ceiling.
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Store one incoming stream in the target folder.
    ///
    /// The folder is created on the fly if missing. The returned entry
    /// reports the client's original filename as `name` and the allocated
    /// physical path as `id`. A stream exceeding the ceiling is aborted
    /// and the partial file removed before `PayloadTooLarge` is returned;
    /// the same cleanup applies to a mid-stream read failure.
    pub async fn store<S>(&self, folder: &str, original_name: &str, mut stream: S) -> AppResult<Entry>
    where
        S: Stream<Item = Result<Bytes, AppError>> + Unpin,
    {
        let dir = self.tree.ensure_folder(folder).await?;
        let physical_name = allocate_physical_name(original_name);
        let path = dir.join(&physical_name);

        let mut file = fs::File::create(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create file for: {original_name}"),
                e,
            )
        })?;

        let mut total: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    self.discard(file, &path).await;
                    return Err(e);
                }
            };

            total += chunk.len() as u64;
            if total > self.max_bytes {
                self.discard(file, &path).await;
                return Err(AppError::payload_too_large(format!(
                    "File exceeds the {} byte limit: {original_name}",
                    self.max_bytes
                )));
            }

            if let Err(e) = file.write_all(&chunk).await {
                self.discard(file, &path).await;
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to write: {original_name}"),
                    e,
                ));
            }
        }

        if let Err(e) = file.flush().await {
            self.discard(file, &path).await;
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to flush: {original_name}"),
                e,
            ));
        }
        drop(file);

        let meta = fs::metadata(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to stat stored file: {physical_name}"),
                e,
            )
        })?;

        let id = TreeStore::child_id(TreeStore::normalize(folder), &physical_name);
        let mut entry = derive_entry(id, original_name, &meta);
        // The stored name would classify identically, but the category is
        // derived from the name the client supplied.
        entry.kind = kind_for_name(original_name);

        debug!(id = entry.id, bytes = total, "Stored upload");
        Ok(entry)
    }

    /// Drop the handle and remove a partially written file. A truncated
    /// artifact must never remain visible in the tree.
    async fn discard(&self, file: fs::File, path: &std::path::Path) {
        drop(file);
        if let Err(e) = fs::remove_file(path).await {
            warn!(path = %path.display(), error = %e, "Failed to remove partial upload");
        }
    }
}
