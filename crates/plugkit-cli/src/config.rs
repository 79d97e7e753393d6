//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. `PLUGKIT_*` environment variables, nested keys joined with `__`
//!    (`PLUGKIT_DEFAULTS__ORGANIZATION=com.acme`); a `.env` file is loaded
//!    into the environment first
//! 3. The TOML file given with `--config`, or [`AppConfig::config_path`]
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::logging::LogLevel;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new plugins.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Diagnostics on stderr.
    pub log: LogConfig,
    /// Where the tool is installed.
    pub tool: ToolConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub organization: String,
    pub android_language: String,
    pub ios_language: String,
    /// Platforms for `create` when `--platforms` is absent.  Empty means all.
    pub platforms: Vec<String>,
    pub with_driver_test: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level with no `-v`; each `-v` raises it one step.
    pub level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Installation root.  Projects may not be created inside it.  Defaults
    /// to the directory holding the executable.
    pub root: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                organization: "com.example".into(),
                android_language: "kotlin".into(),
                ios_language: "swift".into(),
                platforms: Vec::new(),
                with_driver_test: false,
            },
            output: OutputConfig {
                no_color: false,
                format: OutputFormat::Auto,
            },
            log: LogConfig::default(),
            tool: ToolConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix("PLUGKIT"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("defaults.platforms")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.plugkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "plugkit", "plugkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".plugkit.toml"))
    }

    /// The configured tool root, or the directory of the running executable.
    pub fn tool_root(&self) -> CliResult<PathBuf> {
        if let Some(root) = &self.tool.root {
            return Ok(root.clone());
        }
        let exe = std::env::current_exe().map_err(|e| CliError::ConfigError {
            message: "Cannot locate the plugkit executable; set tool.root".into(),
            source: Some(Box::new(e)),
        })?;
        install_dir(&exe).ok_or_else(|| CliError::ConfigError {
            message: format!(
                "Cannot derive an installation directory from {}; set tool.root",
                exe.display()
            ),
            source: None,
        })
    }
}

/// The directory holding `exe`, and nothing above it.
fn install_dir(exe: &Path) -> Option<PathBuf> {
    exe.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
