//! End-to-end scaffolding against the real filesystem and bundled templates.

use std::fs;
use std::path::Path;

use plugkit_adapters::{
    FixedClock, FixedIdGenerator, LocalFilesystem, MemoryFilesystem, SimpleRenderer,
};
use plugkit_core::{
    domain::manifest::declared_platforms,
    prelude::*,
};
use tempfile::{TempDir, tempdir};
use uuid::Uuid;

fn service() -> ScaffoldService {
    service_on(Box::new(LocalFilesystem::new()))
}

fn service_on(filesystem: Box<dyn Filesystem>) -> ScaffoldService {
    ScaffoldService::new(
        filesystem,
        Box::new(SimpleRenderer::with_builtin().unwrap()),
        Box::new(FixedClock(2026)),
        Box::new(FixedIdGenerator(Uuid::from_u128(0xfeed))),
    )
}

fn request(workspace: &TempDir, tool_root: &TempDir, name: &str) -> ScaffoldRequest {
    ScaffoldRequest::new(workspace.path().join(name), tool_root.path())
}

fn declared(root: &Path) -> Vec<String> {
    let mut platforms = declared_platforms(&fs::read_to_string(root.join("pubspec.yaml")).unwrap()).unwrap();
    platforms.sort();
    platforms
}

#[test]
fn create_writes_plugin_and_example() {
    let workspace = tempdir().unwrap();
    let tool_root = tempdir().unwrap();

    let report = service()
        .create(ScaffoldRequest {
            platforms: Some(vec![Platform::Android, Platform::Ios]),
            ..request(&workspace, &tool_root, "awesome_plugin")
        })
        .unwrap();

    let root = workspace.path().join("awesome_plugin");
    assert_eq!(report.project_name, "awesome_plugin");
    assert!(report.plugin_files > 0);
    assert!(report.example_files > 0);
    assert!(report.platforms_added.is_empty());

    assert_eq!(declared(&root), vec!["android", "ios"]);
    assert!(
        root.join("android/src/main/kotlin/com/example/awesome_plugin/AwesomePlugin.kt")
            .is_file()
    );
    assert!(root.join("ios/Classes/AwesomePlugin.swift").is_file());
    assert!(!root.join("linux").exists());

    let example_pubspec = fs::read_to_string(root.join("example/pubspec.yaml")).unwrap();
    assert!(example_pubspec.starts_with("name: awesome_plugin_example\n"));
    let license = fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.starts_with("Copyright (c) 2026 com.example"));
}

#[test]
fn add_platforms_extends_without_clobbering() {
    let workspace = tempdir().unwrap();
    let tool_root = tempdir().unwrap();
    let root = workspace.path().join("sensor_kit");

    service()
        .create(ScaffoldRequest {
            platforms: Some(vec![Platform::Android]),
            ..request(&workspace, &tool_root, "sensor_kit")
        })
        .unwrap();

    let dart_api = root.join("lib/sensor_kit.dart");
    fs::write(&dart_api, "// edited by hand\n").unwrap();

    let report = service()
        .add_platforms(ScaffoldRequest {
            platforms: Some(vec![Platform::Android, Platform::Linux, Platform::Web]),
            ..request(&workspace, &tool_root, "sensor_kit")
        })
        .unwrap();

    assert_eq!(report.platforms_added, vec![Platform::Linux, Platform::Web]);
    assert!(report.manifest_updated);
    assert_eq!(declared(&root), vec!["android", "linux", "web"]);
    assert!(root.join("linux/sensor_kit_plugin.cc").is_file());
    assert!(root.join("lib/sensor_kit_web.dart").is_file());
    assert_eq!(fs::read_to_string(&dart_api).unwrap(), "// edited by hand\n");

    // a second run changes nothing
    let before = fs::read_to_string(root.join("pubspec.yaml")).unwrap();
    let again = service()
        .add_platforms(ScaffoldRequest {
            platforms: Some(vec![Platform::Linux]),
            ..request(&workspace, &tool_root, "sensor_kit")
        })
        .unwrap();
    assert!(again.platforms_added.is_empty());
    assert_eq!(again.plugin_files, 0);
    assert_eq!(fs::read_to_string(root.join("pubspec.yaml")).unwrap(), before);
}

#[test]
fn add_platforms_requires_a_manifest() {
    let workspace = tempdir().unwrap();
    let tool_root = tempdir().unwrap();
    fs::create_dir(workspace.path().join("empty")).unwrap();

    let err = service()
        .add_platforms(ScaffoldRequest {
            platforms: Some(vec![Platform::Ios]),
            ..request(&workspace, &tool_root, "empty")
        })
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn create_refuses_reserved_names_before_writing() {
    let workspace = tempdir().unwrap();
    let tool_root = tempdir().unwrap();

    let err = service()
        .create(request(&workspace, &tool_root, "flutter"))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(!workspace.path().join("flutter").exists());
}

#[test]
fn create_inside_the_tool_root_is_refused() {
    let tool_root = tempdir().unwrap();

    let err = service()
        .create(ScaffoldRequest::new(
            tool_root.path().join("packages/my_plugin"),
            tool_root.path(),
        ))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
}

// ============================================================================
// Reruns over an existing package, in memory
// ============================================================================

const TOOL_ROOT: &str = "/opt/plugkit";

fn in_memory(directory: &str, platforms: &[Platform]) -> ScaffoldRequest {
    ScaffoldRequest {
        platforms: Some(platforms.to_vec()),
        ..ScaffoldRequest::new(directory, TOOL_ROOT)
    }
}

#[test]
fn create_with_overwrite_reconciles_instead_of_replacing_the_manifest() {
    let fs = MemoryFilesystem::new();
    let manifest = Path::new("/work/sensor_kit/pubspec.yaml");

    service_on(Box::new(fs.clone()))
        .create(in_memory("/work/sensor_kit", &[Platform::Android]))
        .unwrap();
    let mut text = fs.read_file(manifest).unwrap();
    text.push_str("# user note\n");
    fs.replace_file(manifest, &text).unwrap();

    let report = service_on(Box::new(fs.clone()))
        .create(ScaffoldRequest {
            overwrite: true,
            ..in_memory("/work/sensor_kit", &[Platform::Ios])
        })
        .unwrap();

    assert_eq!(report.platforms_added, vec![Platform::Ios]);
    let text = fs.read_file(manifest).unwrap();
    let mut platforms = declared_platforms(&text).unwrap();
    platforms.sort();
    assert_eq!(platforms, vec!["android", "ios"]);
    assert!(text.ends_with("# user note\n"));
    assert!(
        fs.read_file(Path::new("/work/sensor_kit/ios/Classes/SensorKitPlugin.swift"))
            .is_some()
    );
}

#[test]
fn add_platforms_keeps_the_organization_the_package_was_created_with() {
    let fs = MemoryFilesystem::new();

    service_on(Box::new(fs.clone()))
        .create(ScaffoldRequest {
            organization: Some("com.acme".into()),
            ..in_memory("/work/sensor_kit", &[Platform::Ios])
        })
        .unwrap();

    service_on(Box::new(fs.clone()))
        .add_platforms(in_memory("/work/sensor_kit", &[Platform::Android]))
        .unwrap();

    let text = fs.read_file(Path::new("/work/sensor_kit/pubspec.yaml")).unwrap();
    assert!(text.contains("package: com.acme.sensor_kit\n"));
    assert!(fs
        .read_file(Path::new(
            "/work/sensor_kit/android/src/main/kotlin/com/acme/sensor_kit/SensorKitPlugin.kt"
        ))
        .is_some());
    assert!(fs
        .list_files()
        .iter()
        .all(|path| !path.to_string_lossy().contains("com/example")));
}

#[test]
fn add_platforms_refuses_a_different_organization() {
    let fs = MemoryFilesystem::new();

    service_on(Box::new(fs.clone()))
        .create(ScaffoldRequest {
            organization: Some("com.acme".into()),
            ..in_memory("/work/sensor_kit", &[Platform::Android])
        })
        .unwrap();
    let before = fs.list_files();

    let err = service_on(Box::new(fs.clone()))
        .add_platforms(ScaffoldRequest {
            organization: Some("org.other".into()),
            ..in_memory("/work/sensor_kit", &[Platform::Web])
        })
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(fs.list_files(), before);
    assert_eq!(fs.replacement_count(), 0);
}
