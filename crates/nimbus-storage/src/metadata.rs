//! Derives display metadata from filesystem stat info.
//!
//! Pure functions only; a stat failure is the caller's concern.

use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use nimbus_core::types::{Entry, EntryKind};

/// Classify a file name into a display category by its extension.
///
/// Matching is case-insensitive; unmapped or missing extensions fall back
/// to [`EntryKind::Default`].
pub fn kind_for_name(name: &str) -> EntryKind {
    let Some(ext) = Path::new(name).extension() else {
        return EntryKind::Default;
    };
    match ext.to_string_lossy().to_lowercase().as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "webp" => EntryKind::Image,
        "mp4" | "avi" | "mkv" | "mov" | "wmv" => EntryKind::Video,
        "mp3" | "wav" | "flac" | "aac" | "m4a" => EntryKind::Audio,
        "pdf" | "doc" | "docx" | "txt" | "rtf" | "xlsx" | "xls" => EntryKind::Document,
        "js" | "ts" | "py" | "java" | "cpp" | "html" | "css" | "json" => EntryKind::Code,
        "zip" | "rar" | "7z" | "tar" | "gz" => EntryKind::Archive,
        _ => EntryKind::Default,
    }
}

/// Build an [`Entry`] from an entry's id, display name, and stat info.
///
/// Directories always map to [`EntryKind::Folder`] regardless of extension
/// and report a size of 0.
pub fn derive_entry(id: impl Into<String>, name: impl Into<String>, meta: &Metadata) -> Entry {
    let name = name.into();
    let (kind, size) = if meta.is_dir() {
        (EntryKind::Folder, 0)
    } else {
        (kind_for_name(&name), meta.len())
    };

    Entry {
        id: id.into(),
        name,
        kind,
        size,
        created: timestamp(meta.created().ok(), meta),
        modified: timestamp(meta.modified().ok(), meta),
    }
}

/// Convert an optional stat timestamp, falling back to the modification
/// time and finally to now. Some filesystems do not record birth time.
fn timestamp(time: Option<SystemTime>, meta: &Metadata) -> DateTime<Utc> {
    time.or_else(|| meta.modified().ok())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(Utc::now)
}
