//! Application layer for plugkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ScaffoldService`, reconciler)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CommandProfile, DEFAULT_ORGANIZATION, EXAMPLE_DIR, ScaffoldReport, ScaffoldRequest,
    ScaffoldService, reconcile_platforms, validate_project_directory,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, Filesystem, IdGenerator, TemplateRenderer};

pub use error::ApplicationError;
