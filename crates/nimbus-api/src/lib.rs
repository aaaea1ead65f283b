//! HTTP API layer for Nimbus Drive.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
