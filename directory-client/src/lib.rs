//! Directory Client - HTTP client for the upstream employee directory
//!
//! Provides generic, envelope-unwrapping HTTP calls against the upstream
//! directory service.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{DirectoryError, DirectoryResult};
pub use self::http::DirectoryClient;

// Re-export shared types for convenience
pub use shared::{DeleteEmployeeInput, Employee, EmployeeCreationInput, Envelope};
