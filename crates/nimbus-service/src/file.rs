//! File and folder listing, info, download, rename, and delete.

use std::sync::Arc;

use tokio::fs::File;
use tracing::info;

use nimbus_core::result::AppResult;
use nimbus_core::types::Entry;
use nimbus_storage::TreeStore;

/// Read and mutate operations on existing entries.
#[derive(Debug, Clone)]
pub struct FileService {
    /// Tree store owning the physical hierarchy.
    tree: Arc<TreeStore>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(tree: Arc<TreeStore>) -> Self {
        Self { tree }
    }

    /// Lists the direct children of a folder.
    pub async fn list(&self, folder: &str) -> AppResult<Vec<Entry>> {
        self.tree.list_folder(folder).await
    }

    /// Returns the derived metadata of a single entry.
    pub async fn info(&self, id: &str) -> AppResult<Entry> {
        self.tree.entry_info(id).await
    }

    /// Opens an entry for streaming download.
    ///
    /// The returned entry carries the display name to report to the
    /// client; reads are never destructive, so a disconnect mid-stream
    /// just drops the handle.
    pub async fn download(&self, id: &str) -> AppResult<(Entry, File)> {
        let (file, entry) = self.tree.open_file(id).await?;
        info!(id, size = entry.size, "Serving download");
        Ok((entry, file))
    }

    /// Renames an entry within its parent folder, returning the new id.
    pub async fn rename(&self, id: &str, new_name: &str) -> AppResult<String> {
        let new_id = self.tree.rename(id, new_name).await?;
        info!(from = id, to = %new_id, "Renamed entry");
        Ok(new_id)
    }

    /// Deletes an entry; folders are removed with all descendants.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.tree.delete(id).await?;
        info!(id, "Deleted entry");
        Ok(())
    }
}
