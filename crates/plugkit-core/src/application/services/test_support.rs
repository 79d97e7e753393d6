//! In-crate fakes for service tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::EntryKind,
    error::PlugkitResult,
};

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    links: BTreeSet<PathBuf>,
    replaces: usize,
    fail_writes_under: Option<PathBuf>,
}

/// Shared-state file system; clones observe the same files.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeFilesystem {
    state: Arc<Mutex<State>>,
}

impl FakeFilesystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seed_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        add_ancestors(&mut state.dirs, path);
        state.files.insert(path.to_path_buf(), content.to_string());
    }

    pub(crate) fn seed_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        add_ancestors(&mut state.dirs, path.as_ref());
        state.dirs.insert(path.as_ref().to_path_buf());
    }

    pub(crate) fn seed_link(&self, path: impl AsRef<Path>) {
        self.state
            .lock()
            .unwrap()
            .links
            .insert(path.as_ref().to_path_buf());
    }

    /// Make every write below `path` fail.
    pub(crate) fn fail_writes_under(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().fail_writes_under = Some(path.as_ref().to_path_buf());
    }

    pub(crate) fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    pub(crate) fn files_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let state = self.state.lock().unwrap();
        state
            .files
            .keys()
            .filter(|p| p.starts_with(root.as_ref()))
            .cloned()
            .collect()
    }

    pub(crate) fn replace_count(&self) -> usize {
        self.state.lock().unwrap().replaces
    }
}

fn add_ancestors(dirs: &mut BTreeSet<PathBuf>, path: &Path) {
    for ancestor in path.ancestors().skip(1) {
        if !ancestor.as_os_str().is_empty() {
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

fn io_error(path: &Path, reason: &str) -> crate::error::PlugkitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

impl Filesystem for FakeFilesystem {
    fn read_to_string(&self, path: &Path) -> PlugkitResult<String> {
        self.file(path).ok_or_else(|| io_error(path, "not found"))
    }

    fn write_file(&self, path: &Path, content: &str) -> PlugkitResult<()> {
        let mut state = self.state.lock().unwrap();
        if state
            .fail_writes_under
            .as_ref()
            .is_some_and(|root| path.starts_with(root))
        {
            return Err(io_error(path, "disk full"));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn replace_file(&self, path: &Path, content: &str) -> PlugkitResult<()> {
        self.write_file(path, content)?;
        self.state.lock().unwrap().replaces += 1;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> PlugkitResult<()> {
        let mut state = self.state.lock().unwrap();
        add_ancestors(&mut state.dirs, path);
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn entry_kind(&self, path: &Path) -> PlugkitResult<EntryKind> {
        let state = self.state.lock().unwrap();
        Ok(if state.links.contains(path) {
            EntryKind::Symlink
        } else if state.files.contains_key(path) {
            EntryKind::File
        } else if state.dirs.contains(path) {
            EntryKind::Directory
        } else {
            EntryKind::Absent
        })
    }

    fn remove_dir_all(&self, path: &Path) -> PlugkitResult<()> {
        let mut state = self.state.lock().unwrap();
        state.files.retain(|p, _| !p.starts_with(path));
        state.dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path) || state.links.contains(path)
    }
}
