//! The file/folder entry model exposed to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display category of an entry, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A directory.
    Folder,
    /// Raster/vector image formats.
    Image,
    /// Video formats.
    Video,
    /// Audio formats.
    Audio,
    /// Office and text documents.
    Document,
    /// Source code and markup.
    Code,
    /// Compressed archives.
    Archive,
    /// Anything without a recognized extension.
    Default,
}

/// A single file or folder as exposed to clients.
///
/// All fields are derived from a live filesystem stat; nothing is stored
/// separately. `id` is the physical name of the entry relative to the
/// storage root and is unique among its siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Root-relative physical path of the entry.
    pub id: String,
    /// Display name. Listings derive it from the physical name; only the
    /// immediate upload response carries the client's original filename.
    pub name: String,
    /// Derived category; always `folder` for directories.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes; 0 for folders.
    pub size: u64,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last modification timestamp.
    pub modified: DateTime<Utc>,
}
