//! Storage configuration.

use serde::{Deserialize, Serialize};

/// File storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory under which the entire file tree lives.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Maximum size of a single uploaded file in bytes (default 100 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Capacity figure used by the frontend usage bar (default 5 GiB).
    /// Informational only; nothing is enforced against it.
    #[serde(default = "default_usage_capacity")]
    pub usage_capacity_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            max_upload_size_bytes: default_max_upload(),
            usage_capacity_bytes: default_usage_capacity(),
        }
    }
}

fn default_root_path() -> String {
    "./data/uploads".to_string()
}

fn default_max_upload() -> u64 {
    104_857_600 // 100 MiB
}

fn default_usage_capacity() -> u64 {
    5_368_709_120 // 5 GiB
}
