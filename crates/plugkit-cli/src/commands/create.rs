//! `plugkit create`: scaffold a new plugin package.
//!
//! Translates flags and configured defaults into a `ScaffoldRequest`; all
//! validation and file generation happens in the core service.

use tracing::{debug, instrument};

use plugkit_core::{
    application::{EXAMPLE_DIR, ScaffoldRequest},
    domain::Platform,
    error::PlugkitError,
};

use crate::{
    cli::CreateArgs,
    commands::{resolve_languages, scaffold_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(directory = %args.directory.display()))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (android_language, ios_language) = resolve_languages(&args.languages, &config)?;
    let platforms = requested_platforms(args.platforms.platforms, &config)?;
    debug!(?platforms, %android_language, %ios_language, "Create request resolved");

    let request = ScaffoldRequest {
        project_name: args.project_name,
        organization: args.organization,
        default_organization: config.defaults.organization.clone(),
        description: args.description,
        platforms,
        android_language,
        ios_language,
        with_driver_test: args.with_driver_test || config.defaults.with_driver_test,
        overwrite: args.overwrite,
        ..ScaffoldRequest::new(&args.directory, config.tool_root()?)
    };

    output.header(&format!("Creating plugin in {}...", args.directory.display()))?;
    let report = scaffold_service()?.create(request)?;

    if report.platforms_added.is_empty() {
        output.success(&format!("Plugin '{}' created", report.project_name))?;
    } else {
        output.success(&format!(
            "Plugin '{}' refreshed; existing pubspec.yaml updated",
            report.project_name
        ))?;
    }
    output.report(&report)?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!(
        "  cd {}",
        report.directory.join(EXAMPLE_DIR).display()
    ))?;
    output.print("  # run the example app against the plugin")?;
    Ok(())
}

/// `--platforms`, else the configured list, else the command default.
fn requested_platforms(
    flags: Vec<Platform>,
    config: &AppConfig,
) -> CliResult<Option<Vec<Platform>>> {
    if !flags.is_empty() {
        return Ok(Some(flags));
    }
    if config.defaults.platforms.is_empty() {
        return Ok(None);
    }
    let configured =
        Platform::parse_list(&config.defaults.platforms.join(",")).map_err(PlugkitError::from)?;
    Ok(Some(configured))
}
