//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value parsers.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use plugkit_core::domain::{AndroidLanguage, IosLanguage, Platform};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "plugkit",
    bin_name = "plugkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold plugin packages for ios, android, desktop and web",
    long_about = "plugkit generates plugin package skeletons (pubspec, Dart API, \
                  native glue per platform and an example app) and can add \
                  platforms to an existing plugin without touching your code.",
    after_help = "EXAMPLES:\n\
        \x20 plugkit create awesome_plugin --org com.acme --platforms android,ios\n\
        \x20 plugkit add-platforms awesome_plugin --platforms linux,web\n\
        \x20 plugkit completions bash > /usr/share/bash-completion/completions/plugkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new plugin package.
    #[command(
        visible_alias = "c",
        about = "Create a new plugin package",
        after_help = "EXAMPLES:\n\
            \x20 plugkit create camera_plugin\n\
            \x20 plugkit create ./plugins/camera --project-name camera_plugin --platforms android\n\
            \x20 plugkit create camera_plugin -a java -i objc --with-driver-test"
    )]
    Create(CreateArgs),

    /// Add platforms to an existing plugin package.
    #[command(
        about = "Add platforms to an existing plugin",
        after_help = "EXAMPLES:\n\
            \x20 plugkit add-platforms . --platforms web\n\
            \x20 plugkit add-platforms camera_plugin --platforms linux,macos,windows"
    )]
    AddPlatforms(AddPlatformsArgs),

    /// Write a default plugkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 plugkit init            # default location\n\
            \x20 plugkit init --force    # replace an existing file\n\
            \x20 plugkit -c ./plugkit.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 plugkit completions bash > ~/.local/share/bash-completion/completions/plugkit\n\
            \x20 plugkit completions zsh  > ~/.zfunc/_plugkit\n\
            \x20 plugkit completions fish > ~/.config/fish/completions/plugkit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `plugkit create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Directory to create the plugin in.  Its last component is the
    /// package name unless `--project-name` is given.
    #[arg(value_name = "DIR", help = "Output directory")]
    pub directory: PathBuf,

    /// Package name, when it differs from the directory name.
    #[arg(long = "project-name", value_name = "NAME", help = "Package name")]
    pub project_name: Option<String>,

    #[arg(
        long = "org",
        value_name = "ORG",
        help = "Reverse-domain organization, e.g. com.example"
    )]
    pub organization: Option<String>,

    #[arg(long = "description", value_name = "TEXT", help = "Package description")]
    pub description: Option<String>,

    #[command(flatten)]
    pub platforms: PlatformArgs,

    #[command(flatten)]
    pub languages: LanguageArgs,

    /// Add an integration test to the example app.
    #[arg(long = "with-driver-test", help = "Generate an integration test")]
    pub with_driver_test: bool,

    /// Replace files that already exist.
    #[arg(long = "overwrite", help = "Overwrite existing files")]
    pub overwrite: bool,
}

// ── add-platforms ─────────────────────────────────────────────────────────────

/// Arguments for `plugkit add-platforms`.
#[derive(Debug, Args)]
pub struct AddPlatformsArgs {
    /// Root of the plugin package (the directory holding pubspec.yaml).
    #[arg(value_name = "DIR", default_value = ".", help = "Plugin directory")]
    pub directory: PathBuf,

    #[arg(
        long = "platforms",
        value_name = "LIST",
        value_delimiter = ',',
        value_parser = parse_platform,
        required = true,
        help = "Platforms to add (ios, android, windows, linux, macos, web)"
    )]
    pub platforms: Vec<Platform>,

    #[arg(
        long = "org",
        value_name = "ORG",
        help = "Reverse-domain organization, e.g. com.example"
    )]
    pub organization: Option<String>,

    #[command(flatten)]
    pub languages: LanguageArgs,
}

// ── shared groups ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PlatformArgs {
    /// Platforms to generate.  Defaults to the configured list, or all
    /// platforms.
    #[arg(
        long = "platforms",
        value_name = "LIST",
        value_delimiter = ',',
        value_parser = parse_platform,
        help = "Platforms to generate (ios, android, windows, linux, macos, web)"
    )]
    pub platforms: Vec<Platform>,
}

#[derive(Debug, Args)]
pub struct LanguageArgs {
    #[arg(
        short = 'a',
        long = "android-language",
        value_name = "LANG",
        value_parser = parse_android_language,
        help = "Android glue language (java, kotlin)"
    )]
    pub android: Option<AndroidLanguage>,

    #[arg(
        short = 'i',
        long = "ios-language",
        value_name = "LANG",
        value_parser = parse_ios_language,
        help = "iOS glue language (objc, swift)"
    )]
    pub ios: Option<IosLanguage>,
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    s.trim().parse().map_err(|e| format!("{e}"))
}

fn parse_android_language(s: &str) -> Result<AndroidLanguage, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_ios_language(s: &str) -> Result<IosLanguage, String> {
    s.parse().map_err(|e| format!("{e}"))
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `plugkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `plugkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
