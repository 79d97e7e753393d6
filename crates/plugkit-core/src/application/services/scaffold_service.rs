//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the project name and target directory
//! 2. Build the plugin and example-app contexts
//! 3. Render templates and write them to the filesystem
//! 4. Declare requested platforms in an existing manifest
//!
//! "create" and "add-platforms" are the same workflow run under different
//! [`CommandProfile`]s.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem, IdGenerator, TemplateRenderer},
        services::{
            platform_reconciler::apply_platform_additions,
            preflight::{absolute_normalized, validate_name, validate_project_directory},
        },
    },
    domain::{
        APP_TEMPLATE, AndroidLanguage, DomainError, IosLanguage, MANIFEST_FILE_NAME,
        METADATA_FILE_NAME, ManifestEditor, PLUGIN_TEMPLATE, Platform, PluginContext, TemplateContext,
        TextScanEditor, derive_android_identifier, manifest,
    },
    error::PlugkitResult,
};

/// Directory, relative to the plugin root, that holds the example app.
pub const EXAMPLE_DIR: &str = "example";

/// Organization used when neither the request nor the package names one.
pub const DEFAULT_ORGANIZATION: &str = "com.example";

/// How a scaffolding command behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandProfile {
    /// Whether `--overwrite` is honored.
    pub allow_overwrite: bool,
    /// Platforms used when the request names none.
    pub default_platforms: &'static [Platform],
    /// The target must already be a package: its name is read from the
    /// manifest, the manifest is edited before anything is rendered, and
    /// only newly added platforms are rendered.
    pub require_existing_manifest: bool,
    /// Render the example application under `example/`.
    pub render_example_app: bool,
}

impl CommandProfile {
    /// Scaffold a new plugin (or refresh an existing one).
    pub const fn create() -> Self {
        Self {
            allow_overwrite: true,
            default_platforms: &Platform::ALL,
            require_existing_manifest: false,
            render_example_app: true,
        }
    }

    /// Extend an existing plugin with more platforms.
    pub const fn add_platforms() -> Self {
        Self {
            allow_overwrite: false,
            default_platforms: &[],
            require_existing_manifest: true,
            render_example_app: false,
        }
    }
}

/// Input to a scaffolding run.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub directory: PathBuf,
    /// Defaults to the directory name, or the manifest's `name` when the
    /// profile requires an existing manifest.
    pub project_name: Option<String>,
    /// `None` keeps the organization an existing package was generated
    /// with, falling back to `default_organization`.
    pub organization: Option<String>,
    pub default_organization: String,
    /// Defaults to the manifest's description, then a stock sentence.
    pub description: Option<String>,
    /// `None` selects the profile's default platforms.
    pub platforms: Option<Vec<Platform>>,
    pub android_language: AndroidLanguage,
    pub ios_language: IosLanguage,
    pub with_driver_test: bool,
    pub overwrite: bool,
    /// Installation root of the tool; projects may not be created inside it.
    pub tool_root: PathBuf,
}

impl ScaffoldRequest {
    pub fn new(directory: impl Into<PathBuf>, tool_root: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            project_name: None,
            organization: None,
            default_organization: DEFAULT_ORGANIZATION.to_string(),
            description: None,
            platforms: None,
            android_language: AndroidLanguage::default(),
            ios_language: IosLanguage::default(),
            with_driver_test: false,
            overwrite: false,
            tool_root: tool_root.into(),
        }
    }
}

/// What a scaffolding run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub directory: PathBuf,
    /// Files written into the plugin root.
    pub plugin_files: usize,
    /// Files written into `example/`.
    pub example_files: usize,
    /// Platforms newly declared in a manifest that existed beforehand.
    pub platforms_added: Vec<Platform>,
    pub manifest_updated: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    editor: Box<dyn ManifestEditor>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Manifests are edited with [`TextScanEditor`]; see
    /// [`with_manifest_editor`](Self::with_manifest_editor).
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            clock,
            ids,
            editor: Box::new(TextScanEditor),
        }
    }

    pub fn with_manifest_editor(mut self, editor: Box<dyn ManifestEditor>) -> Self {
        self.editor = editor;
        self
    }

    /// Scaffold a new plugin package.
    pub fn create(&self, request: ScaffoldRequest) -> PlugkitResult<ScaffoldReport> {
        self.execute(&CommandProfile::create(), request)
    }

    /// Add platforms to an existing plugin package.
    pub fn add_platforms(&self, request: ScaffoldRequest) -> PlugkitResult<ScaffoldReport> {
        self.execute(&CommandProfile::add_platforms(), request)
    }

    /// Run the scaffolding workflow under `profile`.
    #[instrument(
        skip_all,
        fields(
            directory = %request.directory.display(),
            edit_existing = profile.require_existing_manifest
        )
    )]
    pub fn execute(
        &self,
        profile: &CommandProfile,
        request: ScaffoldRequest,
    ) -> PlugkitResult<ScaffoldReport> {
        let directory = absolute_normalized(&request.directory)?;
        let manifest_path = directory.join(MANIFEST_FILE_NAME);
        let overwrite = request.overwrite && profile.allow_overwrite;
        if request.overwrite && !overwrite {
            warn!("--overwrite is ignored by this command");
        }

        // 1. A manifest that predates this run is read once and never
        //    re-rendered
        let prior_manifest = if self.filesystem.exists(&manifest_path) {
            Some(self.filesystem.read_to_string(&manifest_path)?)
        } else if profile.require_existing_manifest {
            return Err(ApplicationError::ManifestNotFound {
                path: manifest_path,
            }
            .into());
        } else {
            None
        };
        let existing_manifest = prior_manifest
            .as_deref()
            .filter(|_| profile.require_existing_manifest);

        // 2. Validate
        let project_name = match (&request.project_name, existing_manifest) {
            (Some(name), _) => name.clone(),
            (None, Some(text)) => manifest::package_name(text)?,
            (None, None) => directory_name(&directory)?,
        };
        validate_name(&project_name)?;
        validate_project_directory(
            self.filesystem.as_ref(),
            &directory,
            &request.tool_root,
            overwrite,
        )?;
        let metadata_path = directory.join(METADATA_FILE_NAME);
        let metadata = if prior_manifest.is_some() && self.filesystem.exists(&metadata_path) {
            Some(self.filesystem.read_to_string(&metadata_path)?)
        } else {
            None
        };
        let organization = resolve_organization(
            &request,
            prior_manifest.as_deref(),
            metadata.as_deref(),
            &project_name,
        )?;

        // 3. Context; one UUID and one clock read per run
        let description = match (&request.description, existing_manifest) {
            (Some(description), _) => Some(description.clone()),
            (None, Some(text)) => manifest::package_description(text)?,
            (None, None) => None,
        };
        let platforms = request
            .platforms
            .clone()
            .unwrap_or_else(|| profile.default_platforms.to_vec());

        let mut builder = PluginContext::builder()
            .organization(&organization)
            .project_name(&project_name)
            .tool_root(&request.tool_root)
            .with_driver_test(request.with_driver_test)
            .android_language(request.android_language)
            .ios_language(request.ios_language)
            .platforms(platforms)
            .year(self.clock.current_year())
            .project_uuid(self.ids.new_uuid());
        if let Some(description) = description {
            builder = builder.description(description);
        }
        let plugin = builder.build()?;

        info!(
            project = %project_name,
            platforms = ?plugin.platforms(),
            "Scaffolding plugin"
        );

        let mut report = ScaffoldReport {
            project_name,
            directory: directory.clone(),
            plugin_files: 0,
            example_files: 0,
            platforms_added: Vec::new(),
            manifest_updated: false,
        };

        match existing_manifest {
            Some(text) => self.extend(&plugin, &directory, &manifest_path, text, &mut report)?,
            None => self.generate(
                profile,
                &plugin,
                &directory,
                prior_manifest.as_deref(),
                overwrite,
                &mut report,
            )?,
        }

        info!(
            plugin_files = report.plugin_files,
            example_files = report.example_files,
            added = ?report.platforms_added,
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    /// Render the named template into `target`, returning the number of
    /// files written. Existing files are skipped unless `overwrite` is set.
    #[instrument(skip(self, context), fields(target = %target.display()))]
    pub fn render_template(
        &self,
        template: &str,
        target: &Path,
        context: &TemplateContext,
        overwrite: bool,
    ) -> PlugkitResult<usize> {
        self.render_into(template, target, context, overwrite, None)
    }

    fn render_into(
        &self,
        template: &str,
        target: &Path,
        context: &TemplateContext,
        overwrite: bool,
        preserved: Option<&Path>,
    ) -> PlugkitResult<usize> {
        let tree = self.renderer.render(template, context)?;
        let mut written = 0;

        for file in tree.files() {
            let path = target.join(&file.path);
            if preserved == Some(path.as_path()) {
                debug!(path = %path.display(), "Keeping the existing manifest");
                continue;
            }
            if !overwrite && self.filesystem.exists(&path) {
                debug!(path = %path.display(), "Keeping existing file");
                continue;
            }
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            written += 1;
        }

        debug!(written, "Template rendered");
        Ok(written)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Render plugin and example app; reconcile a manifest that predates
    /// this run instead of replacing it.
    fn generate(
        &self,
        profile: &CommandProfile,
        plugin: &PluginContext,
        directory: &Path,
        prior_manifest: Option<&str>,
        overwrite: bool,
        report: &mut ScaffoldReport,
    ) -> PlugkitResult<()> {
        let manifest_path = directory.join(MANIFEST_FILE_NAME);
        if let Some(text) = prior_manifest {
            manifest::declared_platforms(text)?;
        }
        let directory_existed = self.filesystem.exists(directory);

        let preserved = prior_manifest.map(|_| manifest_path.as_path());
        let rendered = self.render_passes(profile, plugin, directory, overwrite, preserved);
        let (plugin_files, example_files) = match rendered {
            Ok(counts) => counts,
            Err(e) => {
                if !directory_existed {
                    warn!("Write failed, attempting rollback");
                    self.rollback(directory);
                }
                return Err(e);
            }
        };
        report.plugin_files = plugin_files;
        report.example_files = example_files;

        if let Some(text) = prior_manifest {
            let ids = plugin.identifiers();
            report.platforms_added = apply_platform_additions(
                self.filesystem.as_ref(),
                self.editor.as_ref(),
                &manifest_path,
                text,
                plugin.platforms(),
                &ids.plugin_class,
                &ids.android,
            )?;
            report.manifest_updated = !report.platforms_added.is_empty();
        }
        Ok(())
    }

    fn render_passes(
        &self,
        profile: &CommandProfile,
        plugin: &PluginContext,
        directory: &Path,
        overwrite: bool,
        preserved_manifest: Option<&Path>,
    ) -> PlugkitResult<(usize, usize)> {
        let plugin_files = self.render_into(
            PLUGIN_TEMPLATE,
            directory,
            plugin.context(),
            overwrite,
            preserved_manifest,
        )?;

        let example_files = if profile.render_example_app {
            let example = plugin.example_app()?;
            self.render_template(
                APP_TEMPLATE,
                &directory.join(EXAMPLE_DIR),
                example.context(),
                overwrite,
            )?
        } else {
            0
        };

        Ok((plugin_files, example_files))
    }

    /// Edit the manifest first, then render only what the new platforms
    /// need, never replacing existing files.
    fn extend(
        &self,
        plugin: &PluginContext,
        directory: &Path,
        manifest_path: &Path,
        manifest_text: &str,
        report: &mut ScaffoldReport,
    ) -> PlugkitResult<()> {
        let ids = plugin.identifiers();
        let added = apply_platform_additions(
            self.filesystem.as_ref(),
            self.editor.as_ref(),
            manifest_path,
            manifest_text,
            plugin.platforms(),
            &ids.plugin_class,
            &ids.android,
        )?;

        if !added.is_empty() {
            let restricted = plugin.restricted_to(&added);
            report.plugin_files =
                self.render_template(PLUGIN_TEMPLATE, directory, restricted.context(), false)?;
        }
        report.manifest_updated = !added.is_empty();
        report.platforms_added = added;
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

/// The requested organization, or the one an existing package was
/// generated with: the prefix of its android `package`, else the value
/// recorded in `.metadata`.
///
/// An explicit organization that disagrees with the existing package is
/// refused, so one package never mixes identifiers.
fn resolve_organization(
    request: &ScaffoldRequest,
    prior_manifest: Option<&str>,
    metadata: Option<&str>,
    project_name: &str,
) -> PlugkitResult<String> {
    let package = match prior_manifest {
        Some(text) => manifest::android_package(text)?,
        None => None,
    };
    let existing = package
        .as_deref()
        .and_then(|package| package.rsplit_once('.'))
        .map(|(organization, _)| organization.to_string())
        .or_else(|| metadata.and_then(manifest::recorded_organization));

    let Some(requested) = &request.organization else {
        return Ok(match existing {
            Some(organization) => {
                debug!(%organization, "Keeping the package's organization");
                organization
            }
            None => request.default_organization.clone(),
        });
    };

    let consistent = match (&package, &existing) {
        (Some(package), _) => derive_android_identifier(requested, project_name) == *package,
        (None, Some(existing)) => requested == existing,
        (None, None) => true,
    };
    match existing {
        Some(existing) if !consistent => Err(DomainError::OrganizationMismatch {
            requested: requested.clone(),
            existing,
        }
        .into()),
        _ => Ok(requested.clone()),
    }
}

fn directory_name(directory: &Path) -> PlugkitResult<String> {
    directory
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            DomainError::InvalidName {
                name: directory.display().to_string(),
                reason: "cannot derive a project name from this directory".into(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{
            ports::{MockClock, MockIdGenerator, MockTemplateRenderer},
            services::test_support::FakeFilesystem,
        },
        domain::ProjectTree,
        error::ErrorCategory,
    };
    use uuid::Uuid;

    const TOOL_ROOT: &str = "/opt/plugkit";
    const FIXED_UUID: Uuid = Uuid::from_u128(0xa1b2_c3d4_e5f6_0718_293a_4b5c_6d7e_8f90);

    /// Stands in for the bundled templates: a manifest, a Dart entry point,
    /// and one native file per enabled platform.
    fn fake_render(template: &str, ctx: &TemplateContext) -> PlugkitResult<ProjectTree> {
        let name = ctx.get_str("projectName").unwrap_or_default();
        let class = ctx.get_str("pluginClass").unwrap_or_default();
        let mut tree = ProjectTree::new();

        match template {
            PLUGIN_TEMPLATE => {
                let mut pubspec = format!(
                    "name: {name}\ndescription: {}\nflutter:\n  plugin:\n    platforms:\n",
                    ctx.get_str("description").unwrap_or_default()
                );
                for platform in Platform::ALL {
                    if ctx.flag(platform.as_str()) {
                        pubspec.push_str(&format!("      {platform}:\n        pluginClass: {class}\n"));
                        if platform == Platform::Android {
                            pubspec.push_str(&format!(
                                "        package: {}\n",
                                ctx.get_str("androidIdentifier").unwrap_or_default()
                            ));
                        }
                        tree.add_file(format!("{platform}/{class}.txt"), ctx.get_str("projectUUID").unwrap_or_default())?;
                    }
                }
                tree.add_file("pubspec.yaml", pubspec)?;
                tree.add_file(
                    format!("lib/{name}.dart"),
                    ctx.get_str("iosIdentifier").unwrap_or_default(),
                )?;
            }
            APP_TEMPLATE => {
                tree.add_file("pubspec.yaml", format!("name: {name}\n"))?;
                tree.add_file("lib/main.dart", ctx.get_str("androidIdentifier").unwrap_or_default())?;
            }
            other => {
                return Err(ApplicationError::TemplateNotFound {
                    name: other.to_string(),
                }
                .into());
            }
        }
        Ok(tree)
    }

    fn service(fs: &FakeFilesystem) -> ScaffoldService {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(fake_render);

        let mut clock = MockClock::new();
        clock.expect_current_year().return_const(2026);

        let mut ids = MockIdGenerator::new();
        ids.expect_new_uuid().times(1).return_const(FIXED_UUID);

        ScaffoldService::new(
            Box::new(fs.clone()),
            Box::new(renderer),
            Box::new(clock),
            Box::new(ids),
        )
    }

    fn request(directory: &str, platforms: &[Platform]) -> ScaffoldRequest {
        ScaffoldRequest {
            platforms: Some(platforms.to_vec()),
            ..ScaffoldRequest::new(directory, TOOL_ROOT)
        }
    }

    // ========================================================================
    // create
    // ========================================================================

    #[test]
    fn create_renders_plugin_and_example_app() {
        let fs = FakeFilesystem::new();
        let report = service(&fs)
            .create(request("/work/awesome_plugin", &[Platform::Android, Platform::Ios]))
            .unwrap();

        assert_eq!(report.project_name, "awesome_plugin");
        assert_eq!(report.plugin_files, 4);
        assert_eq!(report.example_files, 2);
        assert!(report.platforms_added.is_empty());
        assert!(!report.manifest_updated);

        let pubspec = fs.file("/work/awesome_plugin/pubspec.yaml").unwrap();
        assert!(pubspec.contains("      android:\n        pluginClass: AwesomePlugin\n"));
        assert!(fs.file("/work/awesome_plugin/lib/awesome_plugin.dart").is_some());
        assert_eq!(
            fs.file("/work/awesome_plugin/example/lib/main.dart").unwrap(),
            "com.example.awesome_plugin_example"
        );
        assert_eq!(
            fs.file("/work/awesome_plugin/example/pubspec.yaml").unwrap(),
            "name: awesome_plugin_example\n"
        );
    }

    #[test]
    fn one_uuid_is_shared_by_every_rendered_file() {
        let fs = FakeFilesystem::new();
        service(&fs)
            .create(request("/work/demo", &[Platform::Ios, Platform::Macos]))
            .unwrap();

        let expected = FIXED_UUID.to_string().to_uppercase();
        assert_eq!(fs.file("/work/demo/ios/DemoPlugin.txt").unwrap(), expected);
        assert_eq!(fs.file("/work/demo/macos/DemoPlugin.txt").unwrap(), expected);
    }

    #[test]
    fn create_defaults_to_every_platform() {
        let fs = FakeFilesystem::new();
        let report = service(&fs)
            .create(ScaffoldRequest::new("/work/demo", TOOL_ROOT))
            .unwrap();

        assert_eq!(report.plugin_files, Platform::ALL.len() + 2);
    }

    #[test]
    fn create_rejects_bad_names_before_writing() {
        let fs = FakeFilesystem::new();
        let err = service_without_id_expectation(&fs)
            .create(request("/work/class", &[Platform::Ios]))
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(fs.files_under("/work").is_empty());
    }

    #[test]
    fn create_refuses_the_tool_root() {
        let fs = FakeFilesystem::new();
        let err = service_without_id_expectation(&fs)
            .create(request("/opt/plugkit/packages/my_plugin", &[Platform::Ios]))
            .unwrap_err();

        assert!(err.to_string().contains("plugkit installation"));
        assert!(fs.files_under("/opt").is_empty());
    }

    #[test]
    fn create_refuses_an_existing_file_even_with_overwrite() {
        let fs = FakeFilesystem::new();
        fs.seed_file("/work/my_plugin", "not a directory");

        let err = service_without_id_expectation(&fs)
            .create(ScaffoldRequest {
                overwrite: true,
                ..request("/work/my_plugin", &[Platform::Ios])
            })
            .unwrap_err();

        assert!(err.to_string().contains("Refusing to overwrite a file"));
    }

    #[test]
    fn create_refuses_links_unless_overwriting() {
        let fs = FakeFilesystem::new();
        fs.seed_link("/work/linked");

        assert!(service_without_id_expectation(&fs)
            .create(request("/work/linked", &[Platform::Ios]))
            .is_err());
        assert!(service(&fs)
            .create(ScaffoldRequest {
                overwrite: true,
                ..request("/work/linked", &[Platform::Ios])
            })
            .is_ok());
    }

    #[test]
    fn explicit_project_name_overrides_the_directory() {
        let fs = FakeFilesystem::new();
        let report = service(&fs)
            .create(ScaffoldRequest {
                project_name: Some("camera".into()),
                ..request("/work/some-dir", &[Platform::Web])
            })
            .unwrap();

        assert_eq!(report.project_name, "camera");
        assert!(fs.file("/work/some-dir/web/CameraPlugin.txt").is_some());
    }

    #[test]
    fn create_over_an_existing_plugin_adds_missing_platforms() {
        let fs = FakeFilesystem::new();
        service(&fs)
            .create(request("/work/demo", &[Platform::Android]))
            .unwrap();

        let report = service(&fs)
            .create(request("/work/demo", &[Platform::Android, Platform::Linux]))
            .unwrap();

        assert_eq!(report.platforms_added, vec![Platform::Linux]);
        assert!(report.manifest_updated);
        let pubspec = fs.file("/work/demo/pubspec.yaml").unwrap();
        assert!(pubspec.contains("    platforms:\n      linux:\n        pluginClass: DemoPlugin\n      android:\n"));
        // Existing files are kept without --overwrite.
        assert_eq!(report.plugin_files, 1);
    }

    #[test]
    fn create_with_overwrite_keeps_the_existing_manifest() {
        let fs = FakeFilesystem::new();
        service(&fs)
            .create(request("/work/demo", &[Platform::Android]))
            .unwrap();
        let mut pubspec = fs.file("/work/demo/pubspec.yaml").unwrap();
        pubspec.push_str("# keep me\n");
        fs.seed_file("/work/demo/pubspec.yaml", &pubspec);

        let report = service(&fs)
            .create(ScaffoldRequest {
                overwrite: true,
                ..request("/work/demo", &[Platform::Ios])
            })
            .unwrap();

        assert_eq!(report.platforms_added, vec![Platform::Ios]);
        assert!(report.manifest_updated);
        let pubspec = fs.file("/work/demo/pubspec.yaml").unwrap();
        assert_eq!(
            manifest::declared_platforms(&pubspec).unwrap(),
            vec!["ios", "android"]
        );
        assert!(pubspec.ends_with("# keep me\n"));
        // Everything but the manifest is re-rendered.
        assert_eq!(report.plugin_files, 2);
        assert!(fs.file("/work/demo/ios/DemoPlugin.txt").is_some());
    }

    #[test]
    fn create_over_a_malformed_manifest_writes_nothing() {
        let fs = FakeFilesystem::new();
        let broken = "name: demo\nflutter:\n  plugin:\n";
        fs.seed_file("/work/demo/pubspec.yaml", broken);

        let err = service(&fs)
            .create(ScaffoldRequest {
                overwrite: true,
                ..request("/work/demo", &[Platform::Ios])
            })
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::ManifestFormat);
        assert_eq!(fs.file("/work/demo/pubspec.yaml").unwrap(), broken);
        assert_eq!(fs.files_under("/work/demo").len(), 1);
    }

    #[test]
    fn failed_render_rolls_back_a_new_directory() {
        let fs = FakeFilesystem::new();
        fs.fail_writes_under("/work/demo/example");

        let err = service(&fs)
            .create(request("/work/demo", &[Platform::Ios]))
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(fs.files_under("/work/demo").is_empty());
    }

    #[test]
    fn failed_render_keeps_a_preexisting_directory() {
        let fs = FakeFilesystem::new();
        fs.seed_file("/work/demo/NOTES.md", "mine");
        fs.fail_writes_under("/work/demo/example");

        assert!(service(&fs)
            .create(request("/work/demo", &[Platform::Ios]))
            .is_err());
        assert_eq!(fs.file("/work/demo/NOTES.md").unwrap(), "mine");
    }

    // ========================================================================
    // add-platforms
    // ========================================================================

    const EXISTING: &str = "name: demo\ndescription: Existing demo.\nflutter:\n  plugin:\n    platforms:\n      android:\n        pluginClass: DemoPlugin\n        package: com.example.demo\n";

    #[test]
    fn add_platforms_edits_the_manifest_and_renders_only_new_platforms() {
        let fs = FakeFilesystem::new();
        fs.seed_file("/work/demo/pubspec.yaml", EXISTING);
        fs.seed_file("/work/demo/lib/demo.dart", "// user code");

        let report = service(&fs)
            .add_platforms(request("/work/demo", &[Platform::Android, Platform::Web]))
            .unwrap();

        assert_eq!(report.platforms_added, vec![Platform::Web]);
        assert_eq!(report.example_files, 0);
        // Only the web file is new; manifest and Dart code are kept.
        assert_eq!(report.plugin_files, 1);
        assert!(fs.file("/work/demo/web/DemoPlugin.txt").is_some());
        assert!(fs.file("/work/demo/android/DemoPlugin.txt").is_none());
        assert_eq!(fs.file("/work/demo/lib/demo.dart").unwrap(), "// user code");
        assert_eq!(fs.replace_count(), 1);

        let pubspec = fs.file("/work/demo/pubspec.yaml").unwrap();
        assert!(pubspec.starts_with("name: demo\ndescription: Existing demo.\n"));
        assert!(pubspec.contains("    platforms:\n      web:\n        pluginClass: DemoPlugin\n      android:\n"));
    }

    #[test]
    fn add_platforms_twice_is_a_no_op() {
        let fs = FakeFilesystem::new();
        fs.seed_file("/work/demo/pubspec.yaml", EXISTING);

        service(&fs)
            .add_platforms(request("/work/demo", &[Platform::Web]))
            .unwrap();
        let after_first = fs.file("/work/demo/pubspec.yaml").unwrap();

        let report = service(&fs)
            .add_platforms(request("/work/demo", &[Platform::Web]))
            .unwrap();

        assert!(report.platforms_added.is_empty());
        assert!(!report.manifest_updated);
        assert_eq!(report.plugin_files, 0);
        assert_eq!(fs.file("/work/demo/pubspec.yaml").unwrap(), after_first);
    }

    #[test]
    fn add_platforms_needs_a_manifest() {
        let fs = FakeFilesystem::new();
        fs.seed_dir("/work/empty");

        let err = service_without_id_expectation(&fs)
            .add_platforms(request("/work/empty", &[Platform::Ios]))
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn add_platforms_aborts_on_a_malformed_manifest_without_writing() {
        let fs = FakeFilesystem::new();
        let broken = "name: demo\nflutter:\n  plugin:\n    pluginClass: DemoPlugin\n";
        fs.seed_file("/work/demo/pubspec.yaml", broken);

        let err = service(&fs)
            .add_platforms(request("/work/demo", &[Platform::Ios]))
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::ManifestFormat);
        assert_eq!(fs.file("/work/demo/pubspec.yaml").unwrap(), broken);
        assert_eq!(fs.files_under("/work/demo").len(), 1);
    }

    #[test]
    fn add_platforms_ignores_overwrite() {
        let fs = FakeFilesystem::new();
        fs.seed_file("/work/demo/pubspec.yaml", EXISTING);
        fs.seed_file("/work/demo/lib/demo.dart", "// user code");

        service(&fs)
            .add_platforms(ScaffoldRequest {
                overwrite: true,
                ..request("/work/demo", &[Platform::Ios])
            })
            .unwrap();

        assert_eq!(fs.file("/work/demo/lib/demo.dart").unwrap(), "// user code");
    }

    #[test]
    fn add_platforms_keeps_the_package_organization() {
        let fs = FakeFilesystem::new();
        let acme = EXISTING.replace("com.example.demo", "com.acme.demo");
        fs.seed_file("/work/demo/pubspec.yaml", &acme);

        service(&fs)
            .add_platforms(ScaffoldRequest {
                default_organization: "org.fallback".into(),
                ..request("/work/demo", &[Platform::Web])
            })
            .unwrap();

        assert_eq!(fs.file("/work/demo/lib/demo.dart").unwrap(), "com.acme.demo");
        let pubspec = fs.file("/work/demo/pubspec.yaml").unwrap();
        assert!(pubspec.contains("package: com.acme.demo\n"));
        assert!(!pubspec.contains("fallback"));
    }

    #[test]
    fn recovered_organization_feeds_new_identifiers() {
        let fs = FakeFilesystem::new();
        service(&fs)
            .create(ScaffoldRequest {
                organization: Some("com.acme".into()),
                ..request("/work/demo", &[Platform::Android])
            })
            .unwrap();

        let report = service(&fs)
            .create(ScaffoldRequest {
                overwrite: true,
                ..request("/work/demo", &[Platform::Ios])
            })
            .unwrap();

        assert_eq!(report.platforms_added, vec![Platform::Ios]);
        assert_eq!(fs.file("/work/demo/lib/demo.dart").unwrap(), "com.acme.demo");
        assert_eq!(
            fs.file("/work/demo/example/lib/main.dart").unwrap(),
            "com.acme.demo_example"
        );
    }

    #[test]
    fn without_an_android_block_the_default_organization_is_used() {
        let fs = FakeFilesystem::new();
        fs.seed_file("/work/demo/pubspec.yaml", IOS_ONLY);

        service(&fs)
            .add_platforms(ScaffoldRequest {
                default_organization: "org.fallback".into(),
                ..request("/work/demo", &[Platform::Android])
            })
            .unwrap();

        let pubspec = fs.file("/work/demo/pubspec.yaml").unwrap();
        assert!(pubspec.contains("package: org.fallback.demo\n"));
    }

    const IOS_ONLY: &str = "name: demo\nflutter:\n  plugin:\n    platforms:\n      ios:\n        pluginClass: DemoPlugin\n";

    #[test]
    fn metadata_supplies_the_organization_when_android_is_absent() {
        let fs = FakeFilesystem::new();
        fs.seed_file("/work/demo/pubspec.yaml", IOS_ONLY);
        fs.seed_file("/work/demo/.metadata", "project_type: plugin\norganization: com.acme\n");

        service(&fs)
            .add_platforms(request("/work/demo", &[Platform::Android]))
            .unwrap();

        let pubspec = fs.file("/work/demo/pubspec.yaml").unwrap();
        assert!(pubspec.contains("package: com.acme.demo\n"));
    }

    #[test]
    fn organization_disagreeing_with_metadata_is_refused() {
        let fs = FakeFilesystem::new();
        fs.seed_file("/work/demo/pubspec.yaml", IOS_ONLY);
        fs.seed_file("/work/demo/.metadata", "organization: com.acme\n");

        let err = service_without_id_expectation(&fs)
            .add_platforms(ScaffoldRequest {
                organization: Some("org.other".into()),
                ..request("/work/demo", &[Platform::Android])
            })
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(fs.file("/work/demo/pubspec.yaml").unwrap(), IOS_ONLY);
    }

    #[test]
    fn conflicting_organization_is_refused_before_writing() {
        let fs = FakeFilesystem::new();
        fs.seed_file("/work/demo/pubspec.yaml", EXISTING);

        let err = service_without_id_expectation(&fs)
            .add_platforms(ScaffoldRequest {
                organization: Some("com.acme".into()),
                ..request("/work/demo", &[Platform::Ios])
            })
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("'com.example'"));
        assert_eq!(fs.file("/work/demo/pubspec.yaml").unwrap(), EXISTING);
        assert_eq!(fs.replace_count(), 0);
    }

    /// A service for runs that fail validation; the uuid may or may not be
    /// drawn depending on where the run stops.
    fn service_without_id_expectation(fs: &FakeFilesystem) -> ScaffoldService {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(fake_render);
        let mut clock = MockClock::new();
        clock.expect_current_year().return_const(2026);
        let mut ids = MockIdGenerator::new();
        ids.expect_new_uuid().return_const(FIXED_UUID);

        ScaffoldService::new(
            Box::new(fs.clone()),
            Box::new(renderer),
            Box::new(clock),
            Box::new(ids),
        )
    }
}
