//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use plugkit_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::EntryKind,
    error::{PlugkitError, PlugkitResult},
};
use tempfile::NamedTempFile;
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> PlugkitResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> PlugkitResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    /// Writes a sibling temporary file and renames it over `path`.
    fn replace_file(&self, path: &Path, content: &str) -> PlugkitResult<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut staged =
            NamedTempFile::new_in(parent).map_err(|e| map_io_error(path, e, "stage file"))?;
        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| map_io_error(path, e, "stage file"))?;

        // Keep the permissions of the file being replaced.
        if let Ok(metadata) = std::fs::metadata(path) {
            std::fs::set_permissions(staged.path(), metadata.permissions())
                .map_err(|e| map_io_error(path, e, "copy permissions"))?;
        }

        staged
            .persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;
        debug!(path = %path.display(), "File replaced");
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> PlugkitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn entry_kind(&self, path: &Path) -> PlugkitResult<EntryKind> {
        let metadata = match std::fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(EntryKind::Absent),
            Err(e) => return Err(map_io_error(path, e, "inspect path")),
        };

        if metadata.file_type().is_symlink() {
            // Links to regular files count as files.
            let target_is_file = std::fs::metadata(path).is_ok_and(|m| m.is_file());
            return Ok(if target_is_file {
                EntryKind::File
            } else {
                EntryKind::Symlink
            });
        }

        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    fn remove_dir_all(&self, path: &Path) -> PlugkitResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PlugkitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
