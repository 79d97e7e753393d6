//! Integration tests for plugkit-core's public API.

use plugkit_core::{
    domain::{
        ManifestEditor, TextScanEditor, is_valid_package_name, manifest::declared_platforms,
    },
    prelude::*,
};

#[test]
fn end_to_end_identifiers() {
    assert_eq!(
        derive_android_identifier("com.example", "awesome_plugin"),
        "com.example.awesome_plugin"
    );
    assert_eq!(
        derive_uti_identifier("com.example", "awesome_plugin"),
        "com.example.awesomePlugin"
    );
    assert_eq!(
        derive_plugin_class_name("awesome_plugin").unwrap(),
        "AwesomePlugin"
    );
}

#[test]
fn android_identifiers_are_well_formed_for_ascii_input() {
    let samples = ["a", "1", "_", "-x-", "com.ex ample", "9lives", "__init__", "a.b.c"];
    for org in samples {
        for name in samples {
            let id = derive_android_identifier(org, name);
            let segments: Vec<&str> = id.split('.').collect();
            assert!(segments.len() >= 2, "{id}");
            for segment in segments {
                let mut chars = segment.chars();
                assert!(chars.next().is_some_and(|c| c.is_ascii_alphabetic()), "{id}");
                assert!(chars.all(|c| c.is_ascii_alphanumeric() || c == '_'), "{id}");
            }
        }
    }
}

#[test]
fn project_name_examples() {
    assert!(validate_project_name("class").is_err());
    assert!(validate_project_name("my_plugin").is_ok());
    assert!(validate_project_name("args").is_err());
    assert!(!is_valid_package_name("yaml"));
}

#[test]
fn existing_android_block_only_gains_ios() {
    let manifest = "flutter:\n  plugin:\n    platforms:\n      android:\n        pluginClass: Foo\n";
    let edit = TextScanEditor
        .reconcile(
            manifest,
            &[Platform::Android, Platform::Ios],
            "Foo",
            "com.example.foo",
        )
        .unwrap();

    assert_eq!(edit.added, vec![Platform::Ios]);
    let updated = edit.updated.unwrap();
    assert!(updated.contains("      ios:\n        pluginClass: Foo\n"));
    assert!(!updated.contains("package:"));
    assert_eq!(declared_platforms(&updated).unwrap(), vec!["ios", "android"]);
}

#[test]
fn plugin_and_example_contexts_are_independent() {
    let plugin = PluginContext::builder()
        .organization("org.acme")
        .project_name("sensor_kit")
        .tool_root("/opt/plugkit")
        .android_language(AndroidLanguage::Java)
        .ios_language(IosLanguage::ObjC)
        .platforms([Platform::Android])
        .year(2030)
        .project_uuid(uuid::Uuid::from_u128(7))
        .build()
        .unwrap();
    let example = plugin.example_app().unwrap();

    assert_eq!(
        plugin.context().get_str("androidIdentifier"),
        Some("org.acme.sensor_kit")
    );
    assert_eq!(
        example.context().get_str("androidIdentifier"),
        Some("org.acme.sensor_kit_example")
    );
    assert_eq!(
        example.context().get_str("projectUUID"),
        plugin.context().get_str("projectUUID")
    );
    assert_eq!(example.context().get_str("pluginClass"), Some("SensorKitExamplePlugin"));
}

#[test]
fn errors_carry_categories_and_suggestions() {
    let err: PlugkitError = validate_project_name("flutter").unwrap_err().into();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(!err.suggestions().is_empty());
}
