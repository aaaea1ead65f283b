//! Core building blocks shared by every Nimbus Drive crate: configuration
//! schemas, the unified error type, and the entry model.

pub mod config;
pub mod error;
pub mod result;
pub mod types;
