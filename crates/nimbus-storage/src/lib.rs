//! Storage layer for Nimbus Drive.
//!
//! Owns the physical directory hierarchy under a single storage root and
//! everything derived from it: metadata records, collision-resistant
//! physical names, and streamed upload ingestion.

pub mod ingest;
pub mod metadata;
pub mod naming;
pub mod tree;

pub use ingest::IngestionPipeline;
pub use tree::TreeStore;
