// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for plugkit.
//!
//! Pure logic only: identifier derivation, name and directory validation,
//! template context construction, template definitions and manifest
//! reconciliation. File system access, clocks and random ids reach the
//! domain as plain values supplied by the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable contexts**: rendering passes never share a mutable map
pub mod context;
pub mod error;
pub mod identifiers;
pub mod manifest;
pub mod template;
pub mod validation;
pub mod value_objects;

pub use context::{
    ContextValue, ExampleAppContext, PluginContext, TemplateContext, TemplateContextBuilder,
};
pub use error::{DirectoryRejection, DomainError, ErrorCategory, NameRejection};
pub use identifiers::{
    Identifiers, camel_case, derive_android_identifier, derive_plugin_class_name,
    derive_uti_identifier,
};
pub use manifest::{
    MANIFEST_FILE_NAME, METADATA_FILE_NAME, ManifestEdit, ManifestEditor, TextScanEditor,
};
pub use template::{
    APP_TEMPLATE, Condition, PLUGIN_TEMPLATE, ProjectTree, RenderedFile, TemplateFile,
    TemplateSet,
};
pub use validation::{
    EntryKind, check_project_directory, is_valid_package_name, validate_project_name,
};
pub use value_objects::{AndroidLanguage, IosLanguage, Platform};
