//! Tracing subscriber setup for the `plugkit` binary.
//!
//! The library crates only emit events; this module decides what reaches
//! stderr. The level starts at `log.level` from the config file and each
//! `-v` raises it one step, while `--quiet` pins it to errors. A set
//! `RUST_LOG` replaces the computed filter entirely.

use std::io::IsTerminal as _;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Crates whose events are shown at the computed level.
const CRATES: [&str; 3] = ["plugkit", "plugkit_core", "plugkit_adapters"];

/// Severity threshold, ordered from quietest to noisiest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const LADDER: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// `steps` levels noisier, saturating at trace.
    fn raised(self, steps: u8) -> LogLevel {
        let index = (self as usize + usize::from(steps)).min(Self::LADDER.len() - 1);
        Self::LADDER[index]
    }
}

/// Everything the subscriber needs, settled from flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LogLevel,
    pub ansi: bool,
}

impl LogSettings {
    pub fn resolve(args: &GlobalArgs, config: &AppConfig) -> Self {
        let level = if args.quiet {
            LogLevel::Error
        } else {
            config.log.level.raised(args.verbose)
        };
        let ansi = !args.no_color && !config.output.no_color && std::io::stderr().is_terminal();
        Self { level, ansi }
    }

    /// Event locations are only worth the noise once debugging.
    fn detailed(&self) -> bool {
        self.level >= LogLevel::Debug
    }

    fn directives(&self) -> String {
        CRATES
            .iter()
            .map(|krate| format!("{krate}={}", self.level.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber. Events go to stderr so stdout only ever
/// carries command output.
pub fn init_logging(settings: &LogSettings) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.directives()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(settings.detailed())
        .with_file(settings.detailed())
        .with_line_number(settings.detailed())
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}
