//! Response DTOs.

use serde::{Deserialize, Serialize};

use nimbus_core::types::Entry;

/// Folder listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// Direct children of the requested folder.
    pub files: Vec<Entry>,
}

/// One failed item in a batch upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFailure {
    /// Original filename of the failed stream.
    pub name: String,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Batch upload response.
///
/// Items are independent; files already written stay written when a later
/// stream fails, and both outcomes are reported per item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Whether every stream was stored.
    pub success: bool,
    /// Entries created, with the original filenames as display names.
    pub files: Vec<Entry>,
    /// Streams that could not be stored.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failed: Vec<UploadFailure>,
    /// Number of entries created.
    pub count: usize,
    /// Summary message.
    pub message: String,
}

/// Folder creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderResponse {
    /// Always true on success.
    pub success: bool,
    /// The created folder.
    pub folder: Entry,
}

/// Rename response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameResponse {
    /// Always true on success.
    pub success: bool,
    /// The entry's id after the rename.
    #[serde(rename = "newId")]
    pub new_id: String,
}

/// Simple acknowledgement response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always true on success.
    pub success: bool,
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
