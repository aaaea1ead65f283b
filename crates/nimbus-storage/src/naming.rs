//! Collision-resistant physical name allocation for uploaded files.

use std::path::Path;

use uuid::Uuid;

/// Allocate a physical on-disk name for an uploaded file.
///
/// The result is a random 128-bit identifier with the original extension
/// appended exactly as supplied, so the stored entry can still be
/// classified by extension. The original base name is never inspected or
/// sanitized. The identifier's entropy makes a collision-detection step
/// unnecessary.
pub fn allocate_physical_name(original_name: &str) -> String {
    let id = Uuid::new_v4();
    match Path::new(original_name).extension() {
        Some(ext) => format!("{id}.{}", ext.to_string_lossy()),
        None => id.to_string(),
    }
}
