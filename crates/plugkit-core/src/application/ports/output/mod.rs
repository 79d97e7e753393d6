//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `plugkit-adapters` crate provides implementations.

use std::path::Path;

use uuid::Uuid;

use crate::domain::{EntryKind, ProjectTree, TemplateContext};
use crate::error::PlugkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `plugkit_adapters::filesystem::LocalFilesystem` (production)
/// - `plugkit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> PlugkitResult<String>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> PlugkitResult<()>;

    /// Replace a file's content so readers see either the old or the new
    /// content, never a partial write.
    fn replace_file(&self, path: &Path, content: &str) -> PlugkitResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PlugkitResult<()>;

    /// What sits at `path`. Links to regular files report `File`; other
    /// links report `Symlink`.
    fn entry_kind(&self, path: &Path) -> PlugkitResult<EntryKind>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> PlugkitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by `plugkit_adapters::renderer::SimpleRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the named template set against `context`.
    ///
    /// Files whose condition does not hold are left out of the tree.
    fn render(&self, template: &str, context: &TemplateContext) -> PlugkitResult<ProjectTree>;
}

/// Source of the current calendar year.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Source of project UUIDs.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn new_uuid(&self) -> Uuid;
}
