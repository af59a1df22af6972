use crate::join::JoinMode;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration for an application embedding Avia.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AviaConfig {
    pub booking: BookingConfig,
    pub logger: LoggerSettings,
}

/// Booking behaviour.
#[derive(Default, Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Join mode applied to passengers created by the embedding application.
    pub join_mode: JoinMode,
}

/// Logger settings, mapped onto the logger builder by the facade.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub name: String,
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub level: String,
    pub console: bool,
    /// Include the event target (module path) in every line.
    pub targets: bool,
    pub json: bool,
    pub path: Option<PathBuf>,
    /// How often the log file under `path` rolls over.
    pub rotation: LogRotation,
    pub env_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            name: "avia".to_owned(),
            level: "info".to_owned(),
            console: true,
            targets: true,
            json: false,
            path: None,
            rotation: LogRotation::default(),
            env_filter: None,
        }
    }
}

/// Rolling period of file logs.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}
