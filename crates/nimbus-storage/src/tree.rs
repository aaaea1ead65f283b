//! The physical directory tree rooted at a single storage root.
//!
//! All path resolution happens here: every client-supplied path is
//! validated against traversal before it touches the filesystem, and every
//! filesystem failure is classified into the application error taxonomy
//! before it leaves this module.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use nimbus_core::error::{AppError, ErrorKind};
use nimbus_core::result::AppResult;
use nimbus_core::types::Entry;

use crate::metadata::derive_entry;

/// The folder path denoting the storage root itself.
pub const ROOT: &str = "root";

/// Owns the physical hierarchy under the storage root and provides
/// folder-scoped create/list/rename/delete operations.
#[derive(Debug, Clone)]
pub struct TreeStore {
    /// Root directory for the entire file tree.
    root: PathBuf,
}

impl TreeStore {
    /// Create a tree store rooted at the given path, creating the root
    /// directory if it does not exist yet.
    pub async fn new(root_path: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root_path.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Strip the `root` marker and surrounding slashes from a folder path.
    pub fn normalize(path: &str) -> &str {
        let trimmed = path.trim_matches('/');
        if trimmed == ROOT { "" } else { trimmed }
    }

    /// Join a normalized folder path and an entry name into an entry id.
    pub fn child_id(folder: &str, name: &str) -> String {
        if folder.is_empty() {
            name.to_string()
        } else {
            format!("{folder}/{name}")
        }
    }

    /// Resolve a root-relative path to an absolute one, rejecting any
    /// component that could escape the storage root.
    pub(crate) fn resolve(&self, rel: &str) -> AppResult<PathBuf> {
        let mut resolved = self.root.clone();
        for component in rel.split('/') {
            if component.is_empty() || component == "." || component == ".." {
                return Err(AppError::invalid_argument(format!("Invalid path: {rel}")));
            }
            if component.contains('\\') || component.contains('\0') {
                return Err(AppError::invalid_argument(format!("Invalid path: {rel}")));
            }
            resolved.push(component);
        }
        Ok(resolved)
    }

    /// Resolve a folder path (`root` or a relative path) to an absolute one.
    fn resolve_folder(&self, folder: &str) -> AppResult<PathBuf> {
        let normalized = Self::normalize(folder);
        if normalized.is_empty() {
            Ok(self.root.clone())
        } else {
            self.resolve(normalized)
        }
    }

    /// Resolve a folder path and create any missing segments under the root.
    pub(crate) async fn ensure_folder(&self, folder: &str) -> AppResult<PathBuf> {
        let path = self.resolve_folder(folder)?;
        fs::create_dir_all(&path)
            .await
            .map_err(|e| classify(e, format!("Failed to create folder: {folder}")))?;
        Ok(path)
    }

    /// List the direct children of a folder, one directory level deep.
    ///
    /// A missing directory is `NotFound`, never an empty success, so a
    /// concurrently deleted folder is distinguishable from an empty one.
    pub async fn list_folder(&self, folder: &str) -> AppResult<Vec<Entry>> {
        let normalized = Self::normalize(folder);
        let path = self.resolve_folder(folder)?;

        let meta = fs::metadata(&path)
            .await
            .map_err(|e| classify(e, format!("Folder not found: {folder}")))?;
        if !meta.is_dir() {
            return Err(AppError::not_found(format!("Folder not found: {folder}")));
        }

        let mut dir = fs::read_dir(&path)
            .await
            .map_err(|e| classify(e, format!("Failed to list folder: {folder}")))?;

        let mut entries = Vec::new();
        while let Some(dirent) = dir
            .next_entry()
            .await
            .map_err(|e| classify(e, "Failed to read directory entry"))?
        {
            let name = dirent.file_name().to_string_lossy().into_owned();
            let meta = match dirent.metadata().await {
                Ok(meta) => meta,
                Err(e) => {
                    // The entry may have been deleted mid-scan; skip it.
                    warn!(name, error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            entries.push(derive_entry(Self::child_id(normalized, &name), name, &meta));
        }

        entries.sort_by(|a, b| {
            let a_dir = a.kind == nimbus_core::types::EntryKind::Folder;
            let b_dir = b.kind == nimbus_core::types::EntryKind::Folder;
            b_dir.cmp(&a_dir).then_with(|| a.name.cmp(&b.name))
        });

        Ok(entries)
    }

    /// Create a folder under a parent path.
    ///
    /// Missing intermediate segments are created under the storage root
    /// only. The final segment uses the filesystem's atomic directory
    /// creation, so of two concurrent identical requests exactly one
    /// succeeds and the other observes `AlreadyExists`.
    pub async fn create_folder(&self, parent: &str, name: &str) -> AppResult<Entry> {
        validate_name(name)?;
        let parent_path = self.ensure_folder(parent).await?;
        let path = parent_path.join(name);

        fs::create_dir(&path)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => {
                    AppError::already_exists(format!("Folder already exists: {name}"))
                }
                _ => classify(e, format!("Failed to create folder: {name}")),
            })?;

        let meta = fs::metadata(&path)
            .await
            .map_err(|e| classify(e, format!("Failed to stat folder: {name}")))?;

        let id = Self::child_id(Self::normalize(parent), name);
        debug!(id, "Created folder");
        Ok(derive_entry(id, name, &meta))
    }

    /// Stat a single entry and return its derived metadata.
    pub async fn entry_info(&self, id: &str) -> AppResult<Entry> {
        let path = self.resolve(id)?;
        let meta = fs::metadata(&path)
            .await
            .map_err(|e| classify(e, format!("Entry not found: {id}")))?;
        Ok(derive_entry(id, leaf_name(id), &meta))
    }

    /// Open a file for streaming reads, returning its derived metadata.
    pub async fn open_file(&self, id: &str) -> AppResult<(fs::File, Entry)> {
        let path = self.resolve(id)?;
        let meta = fs::metadata(&path)
            .await
            .map_err(|e| classify(e, format!("File not found: {id}")))?;
        if meta.is_dir() {
            return Err(AppError::invalid_argument(format!(
                "Not a downloadable file: {id}"
            )));
        }

        let file = fs::File::open(&path)
            .await
            .map_err(|e| classify(e, format!("File not found: {id}")))?;
        Ok((file, derive_entry(id, leaf_name(id), &meta)))
    }

    /// Rename an entry within its parent directory, returning the new id.
    ///
    /// The destination pre-check yields `AlreadyExists`; the rename itself
    /// is atomic. POSIX rename would silently replace an existing
    /// destination, so the window between check and rename remains the
    /// residual race on platforms without a no-replace primitive.
    pub async fn rename(&self, id: &str, new_name: &str) -> AppResult<String> {
        validate_name(new_name)?;
        let src = self.resolve(id)?;

        fs::metadata(&src)
            .await
            .map_err(|e| classify(e, format!("Entry not found: {id}")))?;

        let new_id = match id.rsplit_once('/') {
            Some((parent, _)) => format!("{parent}/{new_name}"),
            None => new_name.to_string(),
        };
        let dst = self.resolve(&new_id)?;

        if fs::metadata(&dst).await.is_ok() {
            return Err(AppError::already_exists(format!(
                "Name already exists: {new_name}"
            )));
        }

        fs::rename(&src, &dst)
            .await
            .map_err(|e| classify(e, format!("Failed to rename: {id}")))?;

        debug!(from = id, to = %new_id, "Renamed entry");
        Ok(new_id)
    }

    /// Delete an entry; folders are removed recursively with all of their
    /// descendants. Not reversible.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let path = self.resolve(id)?;
        let meta = fs::metadata(&path)
            .await
            .map_err(|e| classify(e, format!("Entry not found: {id}")))?;

        if meta.is_dir() {
            fs::remove_dir_all(&path)
                .await
                .map_err(|e| classify(e, format!("Failed to delete folder: {id}")))?;
        } else {
            fs::remove_file(&path)
                .await
                .map_err(|e| classify(e, format!("Failed to delete file: {id}")))?;
        }

        debug!(id, "Deleted entry");
        Ok(())
    }
}

/// Validate a single entry name supplied for create or rename.
fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_argument("Name cannot be empty"));
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(AppError::invalid_argument(format!("Invalid name: {name}")));
    }
    if name == "." || name == ".." {
        return Err(AppError::invalid_argument(format!("Invalid name: {name}")));
    }
    Ok(())
}

/// The final path segment of an entry id.
fn leaf_name(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// Classify a filesystem failure into the application taxonomy. The
/// message stays client-safe; the raw cause rides along for logging.
fn classify(e: io::Error, message: impl Into<String>) -> AppError {
    let kind = match e.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
        _ => ErrorKind::Storage,
    };
    AppError::with_source(kind, message, e)
}
