//! Folder creation.

use std::sync::Arc;

use tracing::info;

use nimbus_core::error::AppError;
use nimbus_core::result::AppResult;
use nimbus_core::types::Entry;
use nimbus_storage::TreeStore;

/// Creates folders under the tree.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Tree store owning the physical hierarchy.
    tree: Arc<TreeStore>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(tree: Arc<TreeStore>) -> Self {
        Self { tree }
    }

    /// Creates a folder under the given parent path.
    pub async fn create(&self, parent: &str, name: &str) -> AppResult<Entry> {
        if name.trim().is_empty() {
            return Err(AppError::invalid_argument("Folder name cannot be empty"));
        }

        let entry = self.tree.create_folder(parent, name).await?;
        info!(id = entry.id, "Created folder");
        Ok(entry)
    }
}
