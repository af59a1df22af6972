use avia_domain::config::{AviaConfig, LogRotation, LoggerSettings};
use avia_kernel::config::{ConfigError, load_config_with_env};
use avia_logger::{LevelFilter, Logger, LoggerError, Rotation};
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

#[avia_derive::avia_error]
pub enum BootstrapError {
    #[error("Configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Logger error{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },

    #[error("Invalid configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Loads the configuration and installs the global logger from its `logger` section.
///
/// `path` defaults to `avia` in the working directory; `AVIA__*` environment variables
/// override file values. Keep the returned [`Logger`] alive for the lifetime of the program.
///
/// # Errors
/// * [`BootstrapError::Config`] if the file is missing or malformed.
/// * [`BootstrapError::InvalidConfiguration`] for an unknown `logger.level`.
/// * [`BootstrapError::Logger`] if the subscriber cannot be installed.
pub fn bootstrap(path: Option<impl AsRef<Path>>) -> Result<(AviaConfig, Logger), BootstrapError> {
    bootstrap_with_env(path, None)
}

/// Same as [`bootstrap`], with environment overrides taken from `env` when it is `Some`.
///
/// # Errors
/// See [`bootstrap`].
pub fn bootstrap_with_env(
    path: Option<impl AsRef<Path>>,
    env: Option<HashMap<String, String>>,
) -> Result<(AviaConfig, Logger), BootstrapError> {
    let config: AviaConfig =
        load_config_with_env(path, env.map(|vars| vars.into_iter().collect())).context("Loading avia config")?;
    let logger = init_logger(&config.logger)?;

    info!(join_mode = %config.booking.join_mode, "Avia booking core ready");

    Ok((config, logger))
}

/// Installs the global logger described by `settings`.
///
/// # Errors
/// * [`BootstrapError::InvalidConfiguration`] for an unknown level.
/// * [`BootstrapError::Logger`] if the logger rejects the settings or is already installed.
pub fn init_logger(settings: &LoggerSettings) -> Result<Logger, BootstrapError> {
    let level = LevelFilter::from_str(&settings.level).map_err(|e| BootstrapError::InvalidConfiguration {
        message: format!("Unknown log level '{}': {e}", settings.level).into(),
        context: Some("logger.level".into()),
    })?;

    let mut builder = Logger::builder()
        .name(&settings.name)
        .level(level)
        .console(settings.console)
        .targets(settings.targets);
    if let Some(filter) = &settings.env_filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &settings.path {
        Some(dir) if settings.json => builder.path(dir).rotation(rotation(settings.rotation)).json().init(),
        Some(dir) => builder.path(dir).rotation(rotation(settings.rotation)).init(),
        None => builder.init(),
    }
    .context("Installing logger")?;

    Ok(logger)
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_maps_every_period() {
        assert_eq!(rotation(LogRotation::Minutely), Rotation::MINUTELY);
        assert_eq!(rotation(LogRotation::Hourly), Rotation::HOURLY);
        assert_eq!(rotation(LogRotation::Daily), Rotation::DAILY);
        assert_eq!(rotation(LogRotation::Never), Rotation::NEVER);
    }

    #[test]
    fn unknown_level_fails_before_the_builder() {
        let settings = LoggerSettings { level: "chatty".to_owned(), ..LoggerSettings::default() };
        let err = init_logger(&settings).expect_err("bad level must fail");
        assert!(matches!(err, BootstrapError::InvalidConfiguration { .. }));
    }
}
