//! # Logger
//!
//! Installs the global `tracing` subscriber used by every Avia crate.
//! Console output is compact and colored; file output is written through a non-blocking
//! rolling appender, optionally as JSON lines. Filtering starts from the configured level,
//! honors `RUST_LOG`, and can be narrowed with [`LoggerBuilder::env_filter`]
//! (e.g. `"avia_booking=debug"`).
//!
//! ## Example
//!
//! ```rust
//! # use avia_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("avia")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

#[derive(Debug)]
struct LoggerOptions {
    console: bool,
    targets: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOptions>,
}

#[derive(Debug)]
struct FileOptions {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self { console: true, targets: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

/// Builder state: no name given yet.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state: named; the name prefixes rolling log files.
#[derive(Debug)]
pub struct Named(String);
/// Builder state: console only.
#[derive(Debug)]
pub struct NoFile;
/// Builder state: file output configured.
#[derive(Debug)]
pub struct ToFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for NoFile {}
impl Sealed for ToFile {}

/// Type-state builder for the global subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available, and file-only knobs
/// (`json`, `rotation`, `max_files`) only exist once [`LoggerBuilder::path`] was called.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = NoFile> {
    options: LoggerOptions,
    name: N,
    output: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Sets the logger name.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { options: self.options, name: Named(name.into()), output: PhantomData }
    }
}

impl LoggerBuilder<Named, ToFile> {
    /// Maximum number of rotated files kept on disk.
    #[must_use]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.options.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.options.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Writes file output as JSON lines.
    #[must_use]
    pub fn json(mut self) -> Self {
        if let Some(file) = self.options.file.as_mut() {
            file.json = true;
        }
        self
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    /// Minimum level emitted when neither `RUST_LOG` nor an explicit filter says otherwise.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.options.level = level;
        self
    }

    /// Adds explicit filter directives, e.g. `avia_booking=debug`.
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.options.env_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.options.console = enabled;
        self
    }

    /// Includes the event target (module path) in every line.
    #[must_use]
    pub const fn targets(mut self, enabled: bool) -> Self {
        self.options.targets = enabled;
        self
    }

    /// Directory that receives the rolling log files.
    pub fn path(self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, ToFile> {
        let mut options = self.options;
        options.file = Some(FileOptions {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        LoggerBuilder { options, name: self.name, output: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker guard; keep it alive for as long as
    /// logs should be flushed to disk.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, an invalid
    ///   filter, or when neither console nor file output is enabled.
    /// * [`LoggerError::Appender`] / [`LoggerError::Internal`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.name;
        validate(&self.options, &name)?;

        let filter = env_filter(&self.options)?;
        let mut layers: Vec<BoxedLayer<_>> = Vec::new();

        if self.options.console {
            layers.push(console_layer(self.options.targets));
        }

        let guard = match &self.options.file {
            Some(file) => {
                let (writer, guard) = file_writer(&name, file)?;
                layers.push(file_layer(writer, file.json, self.options.targets));
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable the console or set a path.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(logger = %name, "Logging initialized");

        Ok(Logger { name, guard })
    }
}

/// Handle to the installed subscriber.
///
/// Dropping it stops the background file writer.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    ///
    /// # Example
    ///
    /// ```rust
    /// use avia_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("avia")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { options: LoggerOptions::default(), name: Unnamed, output: PhantomData }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!(logger = %self.name, "Flushing log files");
        }
    }
}

fn validate(options: &LoggerOptions, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if options.file.as_ref().is_some_and(|f| f.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(options: &LoggerOptions) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(options.level.into());
    match &options.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid env filter '{directives}': {e}").into(),
            context: None,
        }),
    }
}

fn console_layer<S>(targets: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    layer().compact().with_ansi(true).with_target(targets).boxed()
}

fn file_layer<S>(writer: NonBlocking, json: bool, targets: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let base = layer().with_writer(writer).with_ansi(false).with_target(targets);
    if json { base.json().boxed() } else { base.boxed() }
}

fn file_writer(name: &str, file: &FileOptions) -> Result<(NonBlocking, WorkerGuard), LoggerError> {
    fs::create_dir_all(&file.dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create log directory {}", file.dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.dir)
        .context("Building rolling file appender")?;

    Ok(tracing_appender::non_blocking(appender))
}
