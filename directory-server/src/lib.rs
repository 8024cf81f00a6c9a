//! Directory Server - employee directory façade
//!
//! A read/write façade over a single upstream employee-directory service.
//! The upstream is the only source of truth: every read re-fetches the
//! collection, filtering and ranking happen locally, and deletion resolves
//! an id to a name first because the upstream only deletes by name.
//!
//! # Module structure
//!
//! ```text
//! directory-server/src/
//! ├── core/          # Configuration, state, server startup
//! ├── common/        # Logging infrastructure
//! ├── service/       # Employee query service
//! └── api/           # HTTP routes and handlers
//! ```

pub mod api;
pub mod common;
pub mod core;
pub mod service;

// Re-export public types
pub use self::core::{Config, Server, ServerState, build_app};
pub use service::EmployeeService;

// Re-export logger functions
pub use common::logger::init_logger;
