//! Identifier derivation.
//!
//! Turns a human-supplied organization (`com.example`) and project name
//! (`awesome_plugin`) into the identifiers native projects need:
//!
//! | Function                      | Example output                |
//! |-------------------------------|-------------------------------|
//! | [`derive_android_identifier`] | `com.example.awesome_plugin`  |
//! | [`derive_uti_identifier`]     | `com.example.awesomePlugin`   |
//! | [`derive_plugin_class_name`]  | `AwesomePlugin`               |
//!
//! The Android and UTI algorithms look alike but are deliberately separate:
//! Android package names are Java identifiers, UTIs follow the looser
//! reverse-DNS convention (hyphens and non-ASCII allowed, no letter-led
//! segment rule).

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::error::DomainError;

/// Segment appended while an identifier has fewer than two segments.
const PLACEHOLDER_SEGMENT: &str = "untitled";

/// Letter prefixed to Android segments that do not start with a letter.
const SEGMENT_REPAIR_PREFIX: char = 'u';

fn android_disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_.]").expect("static pattern"))
}

fn android_segment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("static pattern"))
}

fn uti_disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9\-.\x{80}-\x{FFFF}]+").expect("static pattern"))
}

/// Derive an Android package identifier from `organization` and `name`.
///
/// Total: any input yields at least two letter-led segments made of
/// `[A-Za-z0-9_]`.
pub fn derive_android_identifier(organization: &str, name: &str) -> String {
    let raw = format!("{organization}.{name}");
    let stripped = android_disallowed().replace_all(&raw, "");

    padded_segments(&stripped)
        .into_iter()
        .map(|segment| {
            if android_segment().is_match(&segment) {
                segment
            } else {
                format!("{SEGMENT_REPAIR_PREFIX}{segment}")
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Derive an Apple-style UTI (bundle) identifier from `organization` and
/// `name`. The name is camel-cased first.
pub fn derive_uti_identifier(organization: &str, name: &str) -> String {
    let raw = format!("{organization}.{}", camel_case(name));
    let stripped = uti_disallowed().replace_all(&raw, "");

    padded_segments(&stripped).join(".")
}

/// Derive the capitalized class name used by generated Dart code.
///
/// # Errors
///
/// `InvalidName` when `name` is empty.
pub fn derive_plugin_class_name(name: &str) -> Result<String, DomainError> {
    let camel = camel_case(name);
    let mut chars = camel.chars();

    match chars.next() {
        Some(first) => Ok(first.to_uppercase().chain(chars).collect()),
        None => Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: "cannot derive a class name from an empty name".into(),
        }),
    }
}

/// Convert `snake_case` to `camelCase`.
///
/// Underscores in either of the last two positions are kept and end the
/// conversion, so `plugin_` and `plugin_x` come back unchanged.
pub fn camel_case(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();

    while let Some(index) = chars.iter().position(|&c| c == '_') {
        if index + 2 >= chars.len() {
            break;
        }
        chars.remove(index);
        let upper: Vec<char> = chars[index].to_uppercase().collect();
        chars.splice(index..=index, upper);
    }

    chars.into_iter().collect()
}

fn padded_segments(identifier: &str) -> Vec<String> {
    let mut segments: Vec<String> = identifier
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    while segments.len() < 2 {
        segments.push(PLACEHOLDER_SEGMENT.to_string());
    }
    segments
}

/// The identifier set shared by every rendering pass of one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifiers {
    pub organization: String,
    pub project_name: String,
    pub android: String,
    /// Shared by the iOS and macOS fields; both use the UTI convention.
    pub apple: String,
    pub plugin_dart_class: String,
    pub plugin_class: String,
}

impl Identifiers {
    /// Derive every identifier for `project_name` under `organization`.
    pub fn derive(organization: &str, project_name: &str) -> Result<Self, DomainError> {
        let plugin_dart_class = derive_plugin_class_name(project_name)?;
        let plugin_class = if plugin_dart_class.ends_with("Plugin") {
            plugin_dart_class.clone()
        } else {
            format!("{plugin_dart_class}Plugin")
        };

        Ok(Self {
            organization: organization.to_string(),
            project_name: project_name.to_string(),
            android: derive_android_identifier(organization, project_name),
            apple: derive_uti_identifier(organization, project_name),
            plugin_dart_class,
            plugin_class,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_android_shape(id: &str) {
        let segments: Vec<&str> = id.split('.').collect();
        assert!(segments.len() >= 2, "{id} has fewer than two segments");
        for segment in segments {
            assert!(
                android_segment().is_match(segment),
                "segment '{segment}' of '{id}' is not letter-led"
            );
        }
    }

    // ========================================================================
    // Android identifiers
    // ========================================================================

    #[test]
    fn android_identifier_plain() {
        assert_eq!(
            derive_android_identifier("com.example", "awesome_plugin"),
            "com.example.awesome_plugin"
        );
    }

    #[test]
    fn android_identifier_strips_illegal_characters() {
        assert_eq!(
            derive_android_identifier("com.exa-mple", "my plugin!"),
            "com.example.myplugin"
        );
        assert_eq!(
            derive_android_identifier("com.exämple", "plügin"),
            "com.exmple.plgin"
        );
    }

    #[test]
    fn android_identifier_pads_to_two_segments() {
        assert_eq!(derive_android_identifier("", ""), "untitled.untitled");
        assert_eq!(derive_android_identifier("...", "x"), "x.untitled");
        assert_eq!(derive_android_identifier("!!!", "***"), "untitled.untitled");
    }

    #[test]
    fn android_identifier_repairs_leading_digits_and_underscores() {
        assert_eq!(
            derive_android_identifier("1com.example", "_plugin"),
            "u1com.example.u_plugin"
        );
    }

    #[test]
    fn android_identifier_is_always_well_formed() {
        let cases = [
            ("com.example", "awesome_plugin"),
            ("9", "9"),
            ("a.b.c", "__"),
            ("-", "-"),
            ("org", "with-hyphen"),
            ("..x..", "..y.."),
            ("com.example", "ÜberPlugin"),
        ];
        for (org, name) in cases {
            let id = derive_android_identifier(org, name);
            assert_android_shape(&id);
            assert!(id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.'));
        }
    }

    // ========================================================================
    // UTI identifiers
    // ========================================================================

    #[test]
    fn uti_identifier_camel_cases_the_name() {
        assert_eq!(
            derive_uti_identifier("com.example", "awesome_plugin"),
            "com.example.awesomePlugin"
        );
    }

    #[test]
    fn uti_identifier_keeps_hyphens_and_non_ascii() {
        assert_eq!(
            derive_uti_identifier("com.my-org", "plügin"),
            "com.my-org.plügin"
        );
        assert_eq!(derive_android_identifier("com.my-org", "plügin"), "com.myorg.plgin");
    }

    #[test]
    fn uti_identifier_drops_characters_above_the_bmp() {
        assert_eq!(derive_uti_identifier("com.example", "cam🎥era"), "com.example.camera");
    }

    #[test]
    fn uti_identifier_has_no_letter_led_repair() {
        assert_eq!(derive_uti_identifier("1com", "2go"), "1com.2go");
        assert_eq!(derive_android_identifier("1com", "2go"), "u1com.u2go");
    }

    #[test]
    fn uti_identifier_pads_to_two_segments() {
        assert_eq!(derive_uti_identifier("", ""), "untitled.untitled");
        assert_eq!(derive_uti_identifier("org", "___"), "org.untitled");
    }

    // ========================================================================
    // Class names
    // ========================================================================

    #[test]
    fn camel_case_leaves_trailing_underscores() {
        assert_eq!(camel_case("awesome_plugin"), "awesomePlugin");
        assert_eq!(camel_case("a_b_c_d"), "aBC_d");
        assert_eq!(camel_case("plugin_"), "plugin_");
        assert_eq!(camel_case("plugin_x"), "plugin_x");
        assert_eq!(camel_case("plain"), "plain");
    }

    #[test]
    fn plugin_class_name_capitalizes() {
        assert_eq!(
            derive_plugin_class_name("awesome_plugin").unwrap(),
            "AwesomePlugin"
        );
        assert_eq!(derive_plugin_class_name("camera").unwrap(), "Camera");
    }

    #[test]
    fn plugin_class_name_rejects_empty() {
        assert!(matches!(
            derive_plugin_class_name(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn identifiers_share_the_apple_id_and_suffix_plugin_once() {
        let ids = Identifiers::derive("com.example", "awesome_plugin").unwrap();
        assert_eq!(ids.apple, "com.example.awesomePlugin");
        assert_eq!(ids.plugin_dart_class, "AwesomePlugin");
        assert_eq!(ids.plugin_class, "AwesomePlugin");

        let ids = Identifiers::derive("com.example", "camera").unwrap();
        assert_eq!(ids.plugin_dart_class, "Camera");
        assert_eq!(ids.plugin_class, "CameraPlugin");
    }
}
