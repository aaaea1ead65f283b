//! Business services for Nimbus Drive.
//!
//! Stateless façades over the storage layer; they hold no data of their
//! own beyond `Arc` handles to the tree and pipeline.

pub mod file;
pub mod folder;
pub mod upload;

pub use file::FileService;
pub use folder::FolderService;
pub use upload::UploadService;
