// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (errors cross the port boundary by value)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("{reason}")]
    InvalidProjectName { name: String, reason: NameRejection },

    #[error("{}", .reason.message(.path))]
    UnsafeProjectDirectory {
        path: PathBuf,
        reason: DirectoryRejection,
    },

    #[error(
        "Organization '{requested}' does not match '{existing}', \
         the organization the existing package was generated with"
    )]
    OrganizationMismatch { requested: String, existing: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Unsupported {kind} '{value}' (expected one of: {expected})")]
    UnsupportedLanguage {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Unknown platform '{0}'")]
    UnknownPlatform(String),

    #[error("Required value missing: {field}")]
    MissingRequiredValue { field: &'static str },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("{reason}")]
    ManifestFormat { reason: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Invalid template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },
}

/// Why a project name was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameRejection {
    /// Not an identifier, or a reserved word of the package ecosystem.
    NotAnIdentifier(String),
    /// Collides with a package the generated project depends on.
    ReservedDependency(String),
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnIdentifier(name) => write!(
                f,
                "\"{name}\" is not a valid package name. Use lowercase_with_underscores; \
                 the name must start with a letter or underscore and must not be a reserved word."
            ),
            Self::ReservedDependency(name) => write!(
                f,
                "Invalid project name: '{name}' - this will conflict with package dependencies."
            ),
        }
    }
}

/// Why a target directory was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryRejection {
    /// The path is the tool's own root or nested inside it.
    InsideToolRoot,
    /// The path is an existing regular file.
    ExistingFile { overwrite_requested: bool },
    /// The path is a symbolic link and overwrite was not requested.
    SymbolicLink,
}

impl DirectoryRejection {
    fn message(&self, path: &std::path::Path) -> String {
        let path = path.display();
        match self {
            Self::InsideToolRoot => format!(
                "Cannot create a project within the plugkit installation ('{path}'). \
                 Create it in another directory."
            ),
            Self::ExistingFile {
                overwrite_requested: true,
            } => format!(
                "Invalid project directory: '{path}' - refers to an existing file. \
                 Refusing to overwrite a file with a directory."
            ),
            Self::ExistingFile { .. } => {
                format!("Invalid project directory: '{path}' - refers to an existing file.")
            }
            Self::SymbolicLink => {
                format!("Invalid project directory: '{path}' - refers to a link.")
            }
        }
    }
}

impl DomainError {
    pub(crate) fn manifest(reason: impl Into<String>) -> Self {
        Self::ManifestFormat {
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName {
                reason: NameRejection::NotAnIdentifier(_),
                ..
            } => vec![
                "Use lowercase letters, digits and underscores".into(),
                "Examples: my_plugin, camera_plugin".into(),
                "Pass --project-name to name the package independently of the directory".into(),
            ],
            Self::InvalidProjectName {
                reason: NameRejection::ReservedDependency(_),
                ..
            } => vec![
                "Pick a name that does not shadow a core package".into(),
                "Try adding a prefix, e.g. my_http".into(),
            ],
            Self::UnsafeProjectDirectory { reason, .. } => match reason {
                DirectoryRejection::InsideToolRoot => {
                    vec!["Choose a directory outside the plugkit installation".into()]
                }
                DirectoryRejection::ExistingFile { .. } => vec![
                    "Remove or rename the existing file".into(),
                    "Choose a different directory".into(),
                ],
                DirectoryRejection::SymbolicLink => vec![
                    "Pass the resolved directory instead of the link".into(),
                    "Or use --overwrite to write through the link".into(),
                ],
            },
            Self::OrganizationMismatch { existing, .. } => vec![
                "Omit --org to keep the package's existing organization".into(),
                format!("Or pass --org {existing}"),
            ],
            Self::UnsupportedLanguage { expected, .. } => {
                vec![format!("Supported values: {expected}")]
            }
            Self::UnknownPlatform(_) => {
                vec!["Supported platforms: ios, android, windows, linux, macos, web".into()]
            }
            Self::ManifestFormat { .. } => vec![
                "Check that pubspec.yaml declares flutter.plugin.platforms".into(),
                "The 'platforms:' key must directly follow the 'plugin:' line".into(),
            ],
            Self::InvalidTemplate { .. } => vec![
                "The bundled templates are broken; this is a bug in plugkit".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidProjectName { .. }
            | Self::UnsafeProjectDirectory { .. }
            | Self::OrganizationMismatch { .. } => ErrorCategory::Validation,
            Self::UnsupportedLanguage { .. }
            | Self::UnknownPlatform(_)
            | Self::MissingRequiredValue { .. } => ErrorCategory::Configuration,
            Self::ManifestFormat { .. } => ErrorCategory::ManifestFormat,
            Self::InvalidTemplate { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    ManifestFormat,
    Internal,
}
