//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The package manifest does not exist.
    #[error("No pubspec.yaml found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// No template set with this name is available.
    #[error("Template '{name}' not found")]
    TemplateNotFound { name: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ManifestNotFound { path } => vec![
                format!("Expected a plugin package manifest at {}", path.display()),
                "Run this command on a directory created with `plugkit create`".into(),
            ],
            Self::TemplateNotFound { name } => {
                vec![format!("Template '{name}' is not bundled with this build")]
            }
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::ManifestNotFound { .. } | Self::TemplateNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::RenderingFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
