//! Shared domain types.

pub mod entry;

pub use entry::{Entry, EntryKind};
