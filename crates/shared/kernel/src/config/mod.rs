use ::config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Basename looked up when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "avia";
/// Prefix of environment overrides, e.g. `AVIA__BOOKING__JOIN_MODE=atomic`.
pub const ENV_PREFIX: &str = "AVIA";
const ENV_SEPARATOR: &str = "__";

#[avia_derive::avia_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file, overlaid with `AVIA__*` environment variables.
///
/// Layers, lowest precedence first:
/// 1. **File**: `path`, or the `avia` basename in the working directory. The format follows the
///    extension (`toml`, `json`, `yaml`, ...).
/// 2. **Environment**: variables prefixed with `AVIA__`; nested keys use `__`
///    (`AVIA__LOGGER__LEVEL` maps to `logger.level`).
///
/// Fields missing from both layers fall back to `T`'s serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
/// values do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads environment overrides from `env` instead of the process
/// environment when it is `Some`.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
