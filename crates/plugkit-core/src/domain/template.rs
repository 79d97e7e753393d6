//! Template definitions and rendered output.
//!
//! A [`TemplateSet`] is a named list of [`TemplateFile`]s whose paths and
//! contents may reference context keys. Rendering a set against a
//! [`TemplateContext`](crate::domain::TemplateContext) yields a
//! [`ProjectTree`]: plain relative paths and final contents, ready to be
//! written by the application layer.

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::{context::TemplateContext, error::DomainError};

/// Name of the template rendered into the package root.
pub const PLUGIN_TEMPLATE: &str = "plugin";
/// Name of the template rendered into `example/`.
pub const APP_TEMPLATE: &str = "app";

/// When a template file is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The context key is truthy.
    Flag(Cow<'static, str>),
    /// The context key renders to exactly this value.
    Equals(Cow<'static, str>, Cow<'static, str>),
    /// Every inner condition holds.
    All(Vec<Condition>),
}

impl Condition {
    pub fn flag(key: &'static str) -> Self {
        Self::Flag(Cow::Borrowed(key))
    }

    pub fn equals(key: &'static str, value: &'static str) -> Self {
        Self::Equals(Cow::Borrowed(key), Cow::Borrowed(value))
    }

    pub fn holds(&self, context: &TemplateContext) -> bool {
        match self {
            Self::Flag(key) => context.flag(key),
            Self::Equals(key, value) => context
                .get(key)
                .is_some_and(|actual| actual.render() == value.as_ref()),
            Self::All(conditions) => conditions.iter().all(|c| c.holds(context)),
        }
    }
}

/// One file of a template set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Relative output path; may contain `{{key}}` placeholders.
    pub path: Cow<'static, str>,
    pub content: Cow<'static, str>,
    pub condition: Option<Condition>,
}

impl TemplateFile {
    pub fn new(path: &'static str, content: &'static str) -> Self {
        Self {
            path: Cow::Borrowed(path),
            content: Cow::Borrowed(content),
            condition: None,
        }
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(match self.condition.take() {
            Some(existing) => Condition::All(vec![existing, condition]),
            None => condition,
        });
        self
    }

    pub fn is_enabled(&self, context: &TemplateContext) -> bool {
        self.condition
            .as_ref()
            .is_none_or(|condition| condition.holds(context))
    }
}

/// A named collection of template files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub name: Cow<'static, str>,
    pub files: Vec<TemplateFile>,
}

impl TemplateSet {
    pub fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: TemplateFile) -> Self {
        self.files.push(file);
        self
    }

    /// Reject empty sets, absolute paths and duplicate paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidTemplate {
                name: self.name.to_string(),
                reason: "template has no files".into(),
            });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if !is_relative_inside(Path::new(file.path.as_ref())) {
                return Err(DomainError::InvalidTemplate {
                    name: self.name.to_string(),
                    reason: format!("path '{}' escapes the output directory", file.path),
                });
            }
            // Conditional variants may share a path; only unconditional
            // duplicates are ambiguous.
            if file.condition.is_none() && !seen.insert(file.path.as_ref()) {
                return Err(DomainError::InvalidTemplate {
                    name: self.name.to_string(),
                    reason: format!("duplicate path '{}'", file.path),
                });
            }
        }
        Ok(())
    }
}

/// A rendered file, relative to the directory it will be written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Rendered output of one template set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTree {
    files: Vec<RenderedFile>,
}

impl ProjectTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file. Paths that are absolute or climb out with `..` are
    /// refused.
    pub fn add_file(
        &mut self,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Result<(), DomainError> {
        let path = path.into();
        if !is_relative_inside(&path) {
            return Err(DomainError::InvalidTemplate {
                name: String::new(),
                reason: format!("rendered path '{}' escapes the output directory", path.display()),
            });
        }
        self.files.push(RenderedFile {
            path,
            content: content.into(),
        });
        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &RenderedFile> {
        self.files.iter()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&RenderedFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_relative_inside(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
        && path.components().next().is_some()
}
