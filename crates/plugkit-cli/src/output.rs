//! Output management and formatting.
//!
//! Human and plain formats print status lines; the JSON format prints only
//! the final report so stdout can be piped into other tools.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use plugkit_core::application::ScaffoldReport;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = args
            .output_format
            .resolve(config.output.format, io::stdout().is_terminal());

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    fn chatty(&self) -> bool {
        !self.quiet && self.resolved_format.is_chatty()
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet and JSON modes.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if !self.chatty() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if !self.chatty() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Summarise a scaffolding run.
    ///
    /// JSON mode prints the report even when `--quiet` is set.
    pub fn report(&self, report: &ScaffoldReport) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
            return self.term.write_line(&json);
        }
        if self.quiet {
            return Ok(());
        }

        self.print(&format!("  Package:   {}", report.project_name))?;
        self.print(&format!("  Location:  {}", report.directory.display()))?;
        self.print(&format!(
            "  Files:     {} plugin, {} example",
            report.plugin_files, report.example_files
        ))?;
        if !report.platforms_added.is_empty() {
            let added: Vec<&str> = report.platforms_added.iter().map(|p| p.as_str()).collect();
            self.print(&format!("  Added:     {}", added.join(", ")))?;
        }
        Ok(())
    }

    fn status(&self, icon: &str, msg: &str, paint: impl Fn(&str) -> String) -> io::Result<()> {
        if !self.chatty() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{icon} {msg}")
        } else {
            format!("{} {msg}", paint(icon))
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
