//! Command handlers, one module per subcommand.

use plugkit_adapters::{LocalFilesystem, RandomIdGenerator, SimpleRenderer, SystemClock};
use plugkit_core::{
    application::ScaffoldService,
    domain::{AndroidLanguage, IosLanguage},
    error::PlugkitError,
};

use crate::{cli::LanguageArgs, config::AppConfig, error::CliResult};

pub mod add_platforms;
pub mod completions;
pub mod create;
pub mod init;

/// Wire the production adapters into a [`ScaffoldService`].
fn scaffold_service() -> CliResult<ScaffoldService> {
    let renderer = SimpleRenderer::with_builtin()?;
    Ok(ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(renderer),
        Box::new(SystemClock),
        Box::new(RandomIdGenerator),
    ))
}

/// Flags first, then the configured defaults.
fn resolve_languages(
    args: &LanguageArgs,
    config: &AppConfig,
) -> CliResult<(AndroidLanguage, IosLanguage)> {
    let android = match args.android {
        Some(language) => language,
        None => config
            .defaults
            .android_language
            .parse()
            .map_err(PlugkitError::from)?,
    };
    let ios = match args.ios {
        Some(language) => language,
        None => config
            .defaults
            .ios_language
            .parse()
            .map_err(PlugkitError::from)?,
    };
    Ok((android, ios))
}
