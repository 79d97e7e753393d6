//! Infrastructure adapters for plugkit.
//!
//! This crate implements the ports defined in `plugkit_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod system;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use system::{FixedClock, FixedIdGenerator, RandomIdGenerator, SystemClock};
