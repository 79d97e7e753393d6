//! # plugkit CLI
//!
//! Scaffolds plugin packages and adds platforms to existing ones.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` and parse CLI arguments (clap handles `--help` / `--version`).
//! 2. Load configuration (file + env + defaults).
//! 3. Initialise the tracing subscriber from the flags and `[log]`.
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                  |
//! |------|--------------------------|
//! |  0   | Success                  |
//! |  1   | Internal / system error  |
//! |  2   | User / input error       |
//! |  3   | Resource not found       |
//! |  4   | Configuration error      |
//! |  5   | Unreadable pubspec.yaml  |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::{LogSettings, init_logging},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    let verbose = cli.global.verbose > 0;

    let config = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, cli.global.no_color),
    };
    let no_color = cli.global.no_color || config.output.no_color;

    let log_settings = LogSettings::resolve(&cli.global, &config);
    if let Err(e) = init_logging(&log_settings) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        level = ?log_settings.level,
        quiet = cli.global.quiet,
        no_color,
        "CLI started"
    );

    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("plugkit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// `init` and `completions` must work even when the config file is missing
/// or broken, so they run on the built-in defaults.
fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    match cli.command {
        Commands::Init(_) | Commands::Completions(_) => Ok(AppConfig::default()),
        Commands::Create(_) | Commands::AddPlatforms(_) => {
            Ok(AppConfig::load(cli.global.config.as_ref())?)
        }
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Create(args) => commands::create::execute(args, config, output),
        Commands::AddPlatforms(args) => commands::add_platforms::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, &cli.global, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Log the error, print it on stderr and pick the exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let msg = if !no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
