//! Domain value objects: Platform, AndroidLanguage, IosLanguage.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. The platform set is closed:
//! there is no registry and no way to add a platform at runtime.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Platform ─────────────────────────────────────────────────────────────────

/// A target platform a plugin can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Windows,
    Linux,
    Macos,
    Web,
}

impl Platform {
    /// Every supported platform, in the order templates list them.
    pub const ALL: [Platform; 6] = [
        Self::Ios,
        Self::Android,
        Self::Windows,
        Self::Linux,
        Self::Macos,
        Self::Web,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Macos => "macos",
            Self::Web => "web",
        }
    }

    /// Parse a comma separated platform list, keeping request order and
    /// dropping repeats.
    pub fn parse_list(list: &str) -> Result<Vec<Platform>, DomainError> {
        let mut platforms = Vec::new();
        for raw in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let platform = raw.parse::<Platform>()?;
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }
        Ok(platforms)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::Macos),
            "web" => Ok(Self::Web),
            other => Err(DomainError::UnknownPlatform(other.to_string())),
        }
    }
}

// ── AndroidLanguage ──────────────────────────────────────────────────────────

/// Language of the generated Android glue code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AndroidLanguage {
    Java,
    #[default]
    Kotlin,
}

impl AndroidLanguage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kotlin",
        }
    }
}

impl fmt::Display for AndroidLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AndroidLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "java" => Ok(Self::Java),
            "kotlin" => Ok(Self::Kotlin),
            other => Err(DomainError::UnsupportedLanguage {
                kind: "android language",
                value: other.to_string(),
                expected: "java, kotlin",
            }),
        }
    }
}

// ── IosLanguage ──────────────────────────────────────────────────────────────

/// Language of the generated iOS/macOS glue code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IosLanguage {
    #[serde(rename = "objc")]
    ObjC,
    #[default]
    Swift,
}

impl IosLanguage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ObjC => "objc",
            Self::Swift => "swift",
        }
    }
}

impl fmt::Display for IosLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IosLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "objc" => Ok(Self::ObjC),
            "swift" => Ok(Self::Swift),
            other => Err(DomainError::UnsupportedLanguage {
                kind: "ios language",
                value: other.to_string(),
                expected: "objc, swift",
            }),
        }
    }
}
