//! Project name and target directory validation.
//!
//! Everything here is a pure decision. Probing the file system for the
//! target's [`EntryKind`] is the application layer's job; see
//! `application::services::validate_project_directory`.

use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::error::{DirectoryRejection, DomainError, NameRejection};

/// Keywords and built-in identifiers of the generated package's language.
/// A package named after one of these cannot be imported.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "base", "break", "case", "catch", "class",
    "const", "continue", "covariant", "default", "deferred", "do", "dynamic", "else", "enum",
    "export", "extends", "extension", "external", "factory", "false", "final", "finally", "for",
    "Function", "get", "hide", "if", "implements", "import", "in", "inout", "interface", "is",
    "late", "library", "mixin", "native", "new", "null", "of", "on", "operator", "out", "part",
    "patch", "required", "rethrow", "return", "sealed", "set", "show", "source", "static",
    "super", "switch", "sync", "this", "throw", "true", "try", "type", "typedef", "var", "void",
    "when", "while", "with", "yield",
];

/// Packages the generated project depends on, directly or transitively.
/// Naming the project after one of them breaks dependency resolution.
const RESERVED_DEPENDENCIES: &[&str] = &[
    "analyzer",
    "args",
    "async",
    "collection",
    "convert",
    "crypto",
    "flutter",
    "flutter_test",
    "front_end",
    "html",
    "http",
    "intl",
    "io",
    "isolate",
    "kernel",
    "logging",
    "matcher",
    "meta",
    "mime",
    "path",
    "plugin",
    "pool",
    "test",
    "utf",
    "watcher",
    "yaml",
];

fn identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static pattern"))
}

/// What currently sits at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Absent,
    File,
    Directory,
    /// A link that does not resolve to a regular file.
    Symlink,
}

fn is_identifier_not_keyword(name: &str) -> bool {
    identifier().is_match(name) && !RESERVED_WORDS.contains(&name)
}

/// `true` iff `name` can be used as a package name.
pub fn is_valid_package_name(name: &str) -> bool {
    is_identifier_not_keyword(name) && !RESERVED_DEPENDENCIES.contains(&name)
}

/// Validate a project name, telling an illegal identifier apart from a
/// dependency collision.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if !is_identifier_not_keyword(name) {
        return Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: NameRejection::NotAnIdentifier(name.to_string()),
        });
    }
    if RESERVED_DEPENDENCIES.contains(&name) {
        return Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: NameRejection::ReservedDependency(name.to_string()),
        });
    }
    Ok(())
}

/// Decide whether `path` may be scaffolded into.
///
/// `path` and `tool_root` are expected to be absolute. `existing` is what
/// the file system reports for `path`, with regular files seen through
/// links.
pub fn check_project_directory(
    path: &Path,
    tool_root: &Path,
    overwrite: bool,
    existing: EntryKind,
) -> Result<(), DomainError> {
    let reject = |reason| {
        Err(DomainError::UnsafeProjectDirectory {
            path: path.to_path_buf(),
            reason,
        })
    };

    if is_within(tool_root, path) {
        return reject(DirectoryRejection::InsideToolRoot);
    }

    if existing == EntryKind::File {
        return reject(DirectoryRejection::ExistingFile {
            overwrite_requested: overwrite,
        });
    }

    if overwrite {
        return Ok(());
    }

    match existing {
        EntryKind::File => reject(DirectoryRejection::ExistingFile {
            overwrite_requested: false,
        }),
        EntryKind::Symlink => reject(DirectoryRejection::SymbolicLink),
        EntryKind::Absent | EntryKind::Directory => Ok(()),
    }
}

/// `true` when `path` equals `root` or lies beneath it, compared lexically
/// after normalization.
pub fn is_within(root: &Path, path: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(root))
}

/// Lexically resolve `.` and `..` components. Does not touch the file
/// system and does not resolve links.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
