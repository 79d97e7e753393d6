//! Checks run before anything is written.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{check_project_directory, validate_project_name, validation::normalize_path},
    error::PlugkitResult,
};

/// Decide whether `path` may be scaffolded into, probing the file system
/// for what currently occupies it.
///
/// Both paths are made absolute and normalized before comparison.
pub fn validate_project_directory(
    filesystem: &dyn Filesystem,
    path: &Path,
    tool_root: &Path,
    overwrite: bool,
) -> PlugkitResult<()> {
    let path = absolute_normalized(path)?;
    let tool_root = absolute_normalized(tool_root)?;
    let existing = filesystem.entry_kind(&path)?;

    debug!(path = %path.display(), ?existing, overwrite, "checking project directory");
    check_project_directory(&path, &tool_root, overwrite, existing)?;
    Ok(())
}

/// Validate a project name, lifting the domain rejection into the core
/// error type.
pub fn validate_name(name: &str) -> PlugkitResult<()> {
    validate_project_name(name)?;
    Ok(())
}

pub(crate) fn absolute_normalized(path: &Path) -> PlugkitResult<PathBuf> {
    std::path::absolute(path)
        .map(|absolute| normalize_path(&absolute))
        .map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to resolve absolute path: {e}"),
            }
            .into()
        })
}
