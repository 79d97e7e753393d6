//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a plugin" or "add platforms".

pub mod platform_reconciler;
pub mod preflight;
pub mod scaffold_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use platform_reconciler::reconcile_platforms;
pub use preflight::{validate_name, validate_project_directory};
pub use scaffold_service::{
    CommandProfile, DEFAULT_ORGANIZATION, EXAMPLE_DIR, ScaffoldReport, ScaffoldRequest,
    ScaffoldService,
};
