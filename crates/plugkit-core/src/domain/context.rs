//! Template context construction.
//!
//! A [`TemplateContext`] is the named-value map templates are rendered
//! against. Scaffolding a plugin renders twice, once for the plugin package
//! and once for its bundled example application, and each pass gets its own
//! immutable context:
//!
//! ```text
//!               TemplateContextBuilder
//!                        │ build()
//!                        ▼
//!   PluginContext ── example_app() ──▶ ExampleAppContext
//!   (Identifiers for `name`)           (Identifiers for `name_example`,
//!                                        same projectUUID and year)
//! ```
//!
//! Neither context is ever mutated after construction, so nothing from the
//! plugin pass can leak into the example-app pass.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    identifiers::Identifiers,
    validation::normalize_path,
    value_objects::{AndroidLanguage, IosLanguage, Platform},
};

/// Suffix appended to the plugin name to name its example application.
pub const EXAMPLE_APP_SUFFIX: &str = "_example";

/// A single template value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    Str(String),
    Bool(bool),
    Int(i64),
}

impl ContextValue {
    /// Text substituted for `{{key}}`.
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
        }
    }

    /// Whether a `{{#key}}` section is emitted.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Ordered key/value map consumed by template renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateContext {
    values: BTreeMap<String, ContextValue>,
}

impl TemplateContext {
    fn insert(&mut self, key: &str, value: impl Into<ContextValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// String value of `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ContextValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Boolean value of `key`; absent keys read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(ContextValue::is_truthy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Values shared by the plugin and example-app passes.
#[derive(Debug, Clone)]
struct SharedSettings {
    tool_root: PathBuf,
    with_driver_test: bool,
    android_language: AndroidLanguage,
    ios_language: IosLanguage,
    platforms: Vec<Platform>,
    year: i32,
    project_uuid: String,
}

impl SharedSettings {
    fn assemble(
        &self,
        ids: &Identifiers,
        description: &str,
        plugin: &Identifiers,
    ) -> TemplateContext {
        let mut ctx = TemplateContext::default();

        ctx.insert("organization", ids.organization.as_str());
        ctx.insert("projectName", ids.project_name.as_str());
        ctx.insert("pluginProjectName", plugin.project_name.as_str());
        ctx.insert("pluginProjectDartClass", plugin.plugin_dart_class.as_str());
        ctx.insert("androidIdentifier", ids.android.as_str());
        ctx.insert("iosIdentifier", ids.apple.as_str());
        ctx.insert("macosIdentifier", ids.apple.as_str());
        ctx.insert("description", description);
        ctx.insert("pluginClass", ids.plugin_class.as_str());
        ctx.insert("pluginDartClass", ids.plugin_dart_class.as_str());
        ctx.insert("headerGuardToken", ids.project_name.to_uppercase());
        ctx.insert("projectUUID", self.project_uuid.as_str());
        ctx.insert("androidLanguage", self.android_language.as_str());
        ctx.insert("iosLanguage", self.ios_language.as_str());
        ctx.insert("toolRoot", self.tool_root.display().to_string());
        ctx.insert("withDriverTest", self.with_driver_test);
        ctx.insert("year", i64::from(self.year));

        for platform in Platform::ALL {
            ctx.insert(platform.as_str(), self.platforms.contains(&platform));
        }
        ctx.insert("hasPlatforms", !self.platforms.is_empty());

        ctx
    }
}

/// Context for rendering the plugin package itself.
#[derive(Debug, Clone)]
pub struct PluginContext {
    identifiers: Identifiers,
    context: TemplateContext,
    shared: SharedSettings,
}

impl PluginContext {
    pub fn builder() -> TemplateContextBuilder {
        TemplateContextBuilder::default()
    }

    pub fn identifiers(&self) -> &Identifiers {
        &self.identifiers
    }

    pub fn context(&self) -> &TemplateContext {
        &self.context
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.shared.platforms
    }

    /// Derive the context for the bundled example application.
    ///
    /// Identifiers are re-derived from `{name}_example`; the project UUID,
    /// year, languages and platform flags carry over unchanged.
    pub fn example_app(&self) -> Result<ExampleAppContext, DomainError> {
        let plugin_name = &self.identifiers.project_name;
        let example_name = format!("{plugin_name}{EXAMPLE_APP_SUFFIX}");
        let identifiers = Identifiers::derive(&self.identifiers.organization, &example_name)?;
        let description = format!("Demonstrates how to use the {plugin_name} plugin.");

        let context = self
            .shared
            .assemble(&identifiers, &description, &self.identifiers);

        Ok(ExampleAppContext {
            identifiers,
            context,
        })
    }

    /// A copy of this context with only `platforms` enabled.
    ///
    /// Used when extending an existing package so templates for platforms
    /// that are already present are not rendered again.
    pub fn restricted_to(&self, platforms: &[Platform]) -> Self {
        let shared = SharedSettings {
            platforms: platforms.to_vec(),
            ..self.shared.clone()
        };
        let description = self.context.get_str("description").unwrap_or_default();
        let context = shared.assemble(&self.identifiers, description, &self.identifiers);

        Self {
            identifiers: self.identifiers.clone(),
            context,
            shared,
        }
    }
}

/// Context for rendering the example application under `example/`.
#[derive(Debug, Clone)]
pub struct ExampleAppContext {
    identifiers: Identifiers,
    context: TemplateContext,
}

impl ExampleAppContext {
    pub fn identifiers(&self) -> &Identifiers {
        &self.identifiers
    }

    pub fn context(&self) -> &TemplateContext {
        &self.context
    }
}

/// Builder for [`PluginContext`].
///
/// `year` and `project_uuid` are plain values: the caller reads its clock
/// and id generator once per top-level operation and passes the results in.
#[derive(Debug, Clone, Default)]
pub struct TemplateContextBuilder {
    organization: Option<String>,
    project_name: Option<String>,
    description: Option<String>,
    tool_root: Option<PathBuf>,
    with_driver_test: bool,
    android_language: Option<AndroidLanguage>,
    ios_language: Option<IosLanguage>,
    platforms: Vec<Platform>,
    year: Option<i32>,
    project_uuid: Option<Uuid>,
}

impl TemplateContextBuilder {
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tool_root(mut self, root: impl AsRef<Path>) -> Self {
        self.tool_root = Some(root.as_ref().to_path_buf());
        self
    }

    pub fn with_driver_test(mut self, enabled: bool) -> Self {
        self.with_driver_test = enabled;
        self
    }

    pub fn android_language(mut self, language: AndroidLanguage) -> Self {
        self.android_language = Some(language);
        self
    }

    pub fn ios_language(mut self, language: IosLanguage) -> Self {
        self.ios_language = Some(language);
        self
    }

    /// Parse and set both native languages from their textual names.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` for anything outside `{java, kotlin}` /
    /// `{objc, swift}`.
    pub fn languages(self, android: &str, ios: &str) -> Result<Self, DomainError> {
        Ok(self
            .android_language(android.parse()?)
            .ios_language(ios.parse()?))
    }

    /// Enabled platforms. Order is kept; repeats are ignored.
    pub fn platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        for platform in platforms {
            if !self.platforms.contains(&platform) {
                self.platforms.push(platform);
            }
        }
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn project_uuid(mut self, uuid: Uuid) -> Self {
        self.project_uuid = Some(uuid);
        self
    }

    /// Assemble the plugin context.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredValue` when a required field was never set, or the
    ///   tool root cannot be made absolute
    /// - `InvalidName` when the project name is empty
    pub fn build(self) -> Result<PluginContext, DomainError> {
        let organization = self
            .organization
            .ok_or(DomainError::MissingRequiredValue {
                field: "organization",
            })?;
        let project_name = self
            .project_name
            .ok_or(DomainError::MissingRequiredValue {
                field: "projectName",
            })?;
        let android_language = self
            .android_language
            .ok_or(DomainError::MissingRequiredValue {
                field: "androidLanguage",
            })?;
        let ios_language = self
            .ios_language
            .ok_or(DomainError::MissingRequiredValue {
                field: "iosLanguage",
            })?;
        let year = self
            .year
            .ok_or(DomainError::MissingRequiredValue { field: "year" })?;
        let project_uuid = self
            .project_uuid
            .ok_or(DomainError::MissingRequiredValue {
                field: "projectUUID",
            })?;
        let tool_root = self
            .tool_root
            .ok_or(DomainError::MissingRequiredValue { field: "toolRoot" })?;
        let tool_root = std::path::absolute(&tool_root)
            .map(|p| normalize_path(&p))
            .map_err(|_| DomainError::MissingRequiredValue { field: "toolRoot" })?;

        let identifiers = Identifiers::derive(&organization, &project_name)?;
        let description = self
            .description
            .unwrap_or_else(|| "A new plugin project.".to_string());

        let shared = SharedSettings {
            tool_root,
            with_driver_test: self.with_driver_test,
            android_language,
            ios_language,
            platforms: self.platforms,
            year,
            project_uuid: project_uuid.to_string().to_uppercase(),
        };
        let context = shared.assemble(&identifiers, &description, &identifiers);

        Ok(PluginContext {
            identifiers,
            context,
            shared,
        })
    }
}
