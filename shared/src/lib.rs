//! Shared types for the directory façade
//!
//! Data models and the upstream response envelope, used by both the
//! directory client and the server.

pub mod models;
pub mod response;

// Re-exports
pub use models::{DeleteEmployeeInput, Employee, EmployeeCreationInput};
pub use response::Envelope;
