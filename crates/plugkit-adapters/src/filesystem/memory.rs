//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use plugkit_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::EntryKind,
    error::PlugkitResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and inspect
/// the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    symlinks: HashSet<PathBuf>,
    replacements: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Record a symbolic link that does not resolve to a regular file.
    pub fn add_symlink(&self, path: &Path) -> PlugkitResult<()> {
        let mut inner = self.write_lock()?;
        inner.symlinks.insert(path.to_path_buf());
        Ok(())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// How many times `replace_file` has been called.
    pub fn replacement_count(&self) -> usize {
        self.inner.read().map(|inner| inner.replacements).unwrap_or(0)
    }

    fn write_lock(
        &self,
    ) -> PlugkitResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn read_lock(&self) -> PlugkitResult<std::sync::RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> PlugkitResult<String> {
        self.read_lock()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> PlugkitResult<()> {
        let mut inner = self.write_lock()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn replace_file(&self, path: &Path, content: &str) -> PlugkitResult<()> {
        self.write_file(path, content)?;
        self.write_lock()?.replacements += 1;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> PlugkitResult<()> {
        let mut inner = self.write_lock()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn entry_kind(&self, path: &Path) -> PlugkitResult<EntryKind> {
        let inner = self.read_lock()?;
        Ok(if inner.symlinks.contains(path) {
            EntryKind::Symlink
        } else if inner.files.contains_key(path) {
            EntryKind::File
        } else if inner.directories.contains(path) {
            EntryKind::Directory
        } else {
            EntryKind::Absent
        })
    }

    fn remove_dir_all(&self, path: &Path) -> PlugkitResult<()> {
        let mut inner = self.write_lock()?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.symlinks.retain(|p| !p.starts_with(path));

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read_lock().is_ok_and(|inner| {
            inner.files.contains_key(path)
                || inner.directories.contains(path)
                || inner.symlinks.contains(path)
        })
    }
}
