//! Package manifest reconciliation.
//!
//! The manifest's `flutter.plugin.platforms` mapping lists the platforms a
//! plugin supports. Adding platforms reads that mapping structurally to find
//! what is already declared, then edits the text to append the missing
//! blocks, so comments, key order and formatting elsewhere in the file
//! survive untouched.

use serde_yaml::Value;

use crate::domain::{error::DomainError, value_objects::Platform};

/// File name of the package manifest at a package root.
pub const MANIFEST_FILE_NAME: &str = "pubspec.yaml";

/// Tool-owned file recording how a package was generated.
pub const METADATA_FILE_NAME: &str = ".metadata";

const PLATFORMS_TOKEN: &str = "platforms:";
const PLUGIN_TOKEN: &str = "plugin:";

/// Result of reconciling a manifest against a requested platform set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEdit {
    /// Platforms that received a new block, in insertion order.
    pub added: Vec<Platform>,
    /// Full new manifest text; `None` when nothing was added.
    pub updated: Option<String>,
}

impl ManifestEdit {
    pub fn is_unchanged(&self) -> bool {
        self.updated.is_none()
    }
}

/// Computes manifest edits that declare additional platforms.
///
/// Implementations never touch storage: they take the current text and
/// return the replacement, leaving the single write to the caller.
pub trait ManifestEditor: Send + Sync {
    fn reconcile(
        &self,
        manifest: &str,
        requested: &[Platform],
        plugin_class: &str,
        android_identifier: &str,
    ) -> Result<ManifestEdit, DomainError>;
}

/// Line-oriented editor.
///
/// The insertion anchor is the first line containing `platforms:` whose
/// previous line contains `plugin:`. This is a lookback heuristic, not a
/// parse: a comment such as `# platforms: see below` directly under
/// `plugin:` is matched as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextScanEditor;

impl ManifestEditor for TextScanEditor {
    fn reconcile(
        &self,
        manifest: &str,
        requested: &[Platform],
        plugin_class: &str,
        android_identifier: &str,
    ) -> Result<ManifestEdit, DomainError> {
        let declared = declared_platforms(manifest)?;
        let lines: Vec<&str> = manifest.split_inclusive('\n').collect();
        let anchor = find_anchor(&lines)
            .ok_or_else(|| DomainError::manifest("invalid manifest: no plugin.platforms section"))?;

        let mut added: Vec<Platform> = Vec::new();
        for &platform in requested {
            if !declared.iter().any(|d| d == platform.as_str()) && !added.contains(&platform) {
                added.push(platform);
            }
        }
        if added.is_empty() {
            return Ok(ManifestEdit {
                added,
                updated: None,
            });
        }

        let matched = lines[anchor];
        let prefix = &matched[..matched.find(PLATFORMS_TOKEN).unwrap_or(0)];
        let eol = line_ending(matched).unwrap_or_else(|| dominant_line_ending(&lines));

        let mut block = Vec::new();
        for platform in &added {
            block.push(format!("{prefix}  {platform}:"));
            block.push(format!("{prefix}    pluginClass: {plugin_class}"));
            if *platform == Platform::Android {
                block.push(format!("{prefix}    package: {android_identifier}"));
            }
        }

        let mut updated = String::with_capacity(manifest.len() + block.len() * 32);
        for (index, line) in lines.iter().enumerate() {
            updated.push_str(line);
            if index != anchor {
                continue;
            }
            let anchor_terminated = line_ending(line).is_some();
            if !anchor_terminated {
                updated.push_str(eol);
            }
            for inserted in &block {
                updated.push_str(inserted);
                updated.push_str(eol);
            }
            if !anchor_terminated {
                updated.truncate(updated.len() - eol.len());
            }
        }

        Ok(ManifestEdit {
            added,
            updated: Some(updated),
        })
    }
}

/// Platform keys declared under `flutter.plugin.platforms`.
///
/// # Errors
///
/// `ManifestFormat` when the text is not YAML or the path is missing or
/// null.
pub fn declared_platforms(manifest: &str) -> Result<Vec<String>, DomainError> {
    let root = parse(manifest)?;
    let platforms = root
        .get("flutter")
        .and_then(|flutter| flutter.get("plugin"))
        .and_then(|plugin| plugin.get("platforms"))
        .filter(|platforms| !platforms.is_null())
        .ok_or_else(|| DomainError::manifest("invalid plugin manifest"))?;

    Ok(platforms
        .as_mapping()
        .map(|mapping| {
            mapping
                .keys()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default())
}

/// The `package` of the android block, if the manifest declares one.
pub fn android_package(manifest: &str) -> Result<Option<String>, DomainError> {
    Ok(parse(manifest)?
        .get("flutter")
        .and_then(|flutter| flutter.get("plugin"))
        .and_then(|plugin| plugin.get("platforms"))
        .and_then(|platforms| platforms.get(Platform::Android.as_str()))
        .and_then(|android| android.get("package"))
        .and_then(Value::as_str)
        .map(str::to_string))
}

/// The `organization` recorded in a package's `.metadata` file.
///
/// Unreadable metadata records nothing.
pub fn recorded_organization(metadata: &str) -> Option<String> {
    serde_yaml::from_str::<Value>(metadata)
        .ok()?
        .get("organization")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// The package `name` declared at the top of the manifest.
pub fn package_name(manifest: &str) -> Result<String, DomainError> {
    top_level_str(manifest, "name")?
        .ok_or_else(|| DomainError::manifest("invalid manifest: missing package name"))
}

/// The package `description`, if the manifest has one.
pub fn package_description(manifest: &str) -> Result<Option<String>, DomainError> {
    top_level_str(manifest, "description")
}

fn top_level_str(manifest: &str, key: &str) -> Result<Option<String>, DomainError> {
    Ok(parse(manifest)?
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string))
}

fn parse(manifest: &str) -> Result<Value, DomainError> {
    serde_yaml::from_str(manifest)
        .map_err(|err| DomainError::manifest(format!("invalid plugin manifest: {err}")))
}

fn find_anchor(lines: &[&str]) -> Option<usize> {
    lines
        .windows(2)
        .position(|pair| pair[0].contains(PLUGIN_TOKEN) && pair[1].contains(PLATFORMS_TOKEN))
        .map(|index| index + 1)
}

fn line_ending(line: &str) -> Option<&'static str> {
    if line.ends_with("\r\n") {
        Some("\r\n")
    } else if line.ends_with('\n') {
        Some("\n")
    } else {
        None
    }
}

fn dominant_line_ending(lines: &[&str]) -> &'static str {
    lines
        .iter()
        .find_map(|line| line_ending(line))
        .unwrap_or("\n")
}
