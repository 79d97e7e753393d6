//! Flags accepted before or after any subcommand.
//!
//! Logging and output flags here are the top layer over the `[log]` and
//! `[output]` sections of the config file.

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the log level one step per occurrence, starting from the
    /// configured `log.level` (warn unless configured).
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors reach stderr; JSON reports are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors and reports only"
    )]
    pub quiet: bool,

    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output (also NO_COLOR)"
    )]
    pub no_color: bool,

    /// An explicit file must exist; the per-user file is optional.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed on stdout"
    )]
    pub output_format: OutputFormat,
}

/// How results are printed on stdout.
///
/// The same values are accepted by `--output-format` and by `output.format`
/// in the config file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Defer to the config file, then to whether stdout is a terminal.
    #[default]
    Auto,
    /// Colored status lines and a summary.
    Human,
    /// The same lines without ANSI codes.
    Plain,
    /// Only the scaffold report, as JSON.
    Json,
}

impl OutputFormat {
    /// Settle `Auto`: the flag wins over `configured`, and an undecided
    /// pair falls back to the terminal check.
    pub fn resolve(self, configured: OutputFormat, stdout_is_terminal: bool) -> OutputFormat {
        match (self, configured) {
            (OutputFormat::Auto, OutputFormat::Auto) if stdout_is_terminal => OutputFormat::Human,
            (OutputFormat::Auto, OutputFormat::Auto) => OutputFormat::Plain,
            (OutputFormat::Auto, configured) => configured,
            (explicit, _) => explicit,
        }
    }

    /// Whether stdout carries anything besides the final report.
    pub fn is_chatty(self) -> bool {
        self != OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_config_beats_terminal() {
        use OutputFormat::*;

        assert_eq!(Plain.resolve(Json, true), Plain);
        assert_eq!(Auto.resolve(Json, true), Json);
        assert_eq!(Auto.resolve(Auto, true), Human);
        assert_eq!(Auto.resolve(Auto, false), Plain);
    }

    #[test]
    fn config_spelling_matches_the_flag() {
        #[derive(Deserialize)]
        struct Output {
            format: OutputFormat,
        }
        let parsed: Output = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
        assert!(!parsed.format.is_chatty());
    }
}
