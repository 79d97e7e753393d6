//! `plugkit add-platforms`: extend an existing plugin package.

use tracing::{instrument, warn};

use plugkit_core::application::ScaffoldRequest;

use crate::{
    cli::AddPlatformsArgs,
    commands::{resolve_languages, scaffold_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(directory = %args.directory.display()))]
pub fn execute(args: AddPlatformsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (android_language, ios_language) = resolve_languages(&args.languages, &config)?;

    let request = ScaffoldRequest {
        organization: args.organization,
        default_organization: config.defaults.organization.clone(),
        platforms: Some(args.platforms),
        android_language,
        ios_language,
        ..ScaffoldRequest::new(&args.directory, config.tool_root()?)
    };

    output.header(&format!(
        "Adding platforms to {}...",
        args.directory.display()
    ))?;
    let report = scaffold_service()?.add_platforms(request)?;

    if report.platforms_added.is_empty() {
        warn!(package = %report.project_name, "No new platforms to declare");
        output.info("All requested platforms are already declared in pubspec.yaml")?;
    } else {
        let added: Vec<&str> = report.platforms_added.iter().map(|p| p.as_str()).collect();
        output.success(&format!(
            "Added {} to '{}'",
            added.join(", "),
            report.project_name
        ))?;
    }
    output.report(&report)?;
    Ok(())
}
