//! Applying platform additions to a manifest on disk.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ManifestEditor, Platform, TextScanEditor},
    error::PlugkitResult,
};

/// Declare `requested` platforms in the manifest at `manifest_path`.
///
/// Returns the platforms that were added, in request order. Platforms the
/// manifest already declares are skipped; when none remain the file is not
/// written.
pub fn reconcile_platforms(
    filesystem: &dyn Filesystem,
    manifest_path: &Path,
    requested: &[Platform],
    plugin_class: &str,
    android_identifier: &str,
) -> PlugkitResult<Vec<Platform>> {
    if !filesystem.exists(manifest_path) {
        return Err(ApplicationError::ManifestNotFound {
            path: manifest_path.to_path_buf(),
        }
        .into());
    }
    let manifest = filesystem.read_to_string(manifest_path)?;

    apply_platform_additions(
        filesystem,
        &TextScanEditor,
        manifest_path,
        &manifest,
        requested,
        plugin_class,
        android_identifier,
    )
}

/// Compute the edit for already-read `manifest` text and write it back.
///
/// The new content is computed in full before the single write, so a
/// format error leaves the file untouched.
#[instrument(
    skip_all,
    fields(manifest = %manifest_path.display(), requested = requested.len())
)]
pub(crate) fn apply_platform_additions(
    filesystem: &dyn Filesystem,
    editor: &dyn ManifestEditor,
    manifest_path: &Path,
    manifest: &str,
    requested: &[Platform],
    plugin_class: &str,
    android_identifier: &str,
) -> PlugkitResult<Vec<Platform>> {
    let edit = editor.reconcile(manifest, requested, plugin_class, android_identifier)?;

    match &edit.updated {
        Some(updated) => {
            filesystem.replace_file(manifest_path, updated)?;
            info!(added = ?edit.added, "Manifest updated");
        }
        None => debug!("All requested platforms already declared"),
    }

    Ok(edit.added)
}
