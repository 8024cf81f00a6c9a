//! Data models
//!
//! Shared between the directory client and the server.

pub mod employee;

// Re-exports
pub use employee::*;
