//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Query parameters for folder listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Folder to list; defaults to the storage root.
    pub folder: Option<String>,
}

/// Request to create a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
    /// Parent folder path; defaults to the storage root.
    #[serde(default)]
    pub parent: Option<String>,
}

/// Request to rename an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRequest {
    /// New display name.
    pub name: String,
}
