//! # Logger
//!
//! Diagnostics for the tour. Lesson output owns stdout, so everything here goes to
//! stderr (and, optionally, to rolling files), filtered by level or `RUST_LOG`.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"tour_kernel=debug"`), which take the place of `RUST_LOG`.
//! * Use [`LoggerBuilder::directory`] to mirror diagnostics into rotated files.
//!
//! ## Example
//!
//! ```rust
//! # use tour_logger::{LevelFilter, LogFormat, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("enum-tour")
//!     .format(LogFormat::Compact)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use strum_macros::{Display, EnumString};
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::fmt::{self, MakeWriter, layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// How each diagnostic line is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line, human readable.
    #[default]
    Compact,
    /// Multi-line, human readable, with span context.
    Pretty,
    /// One JSON object per line.
    Json,
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    ansi: bool,
    format: LogFormat,
    level: LevelFilter,
    env_filter: Option<String>,
    directory: Option<PathBuf>,
    max_files: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            ansi: true,
            format: LogFormat::default(),
            level: LevelFilter::INFO,
            env_filter: None,
            directory: None,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

/// Builder state before a name has been given.
#[derive(Debug)]
pub struct NoName;
/// Builder state once the logger is named and can be initialized.
#[derive(Debug)]
pub struct WithName(String);

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger, used as the rolling file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { config: self.config, name: WithName(name.into()) }
    }
}

impl<N> LoggerBuilder<N> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `tour_kernel=debug`).
    ///
    /// Without one, `RUST_LOG` is read and the configured level is the fallback.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the stderr layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Enables or disables ANSI colors on the stderr layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Sets the line format for every layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Mirrors diagnostics into rolling files under `directory`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config.directory = Some(directory.into());
        self
    }

    /// Configures maximum number of log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }
}

impl LoggerBuilder<WithName> {
    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. **Note:** when file output is enabled this handle contains a
    /// [`WorkerGuard`] that must be kept alive so buffered lines are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    /// Returns [`LoggerError::Io`] or [`LoggerError::Appender`] if the log directory is unusable.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name) } = self;
        validate_config(&config, &name)?;

        let env_filter = build_env_filter(&config)?;

        let mut layers = Vec::new();

        if config.console {
            let stderr = layer().with_writer(std::io::stderr).with_ansi(config.ansi);
            layers.push(format_layer(stderr, config.format));
        }

        let guard = if let Some(directory) = &config.directory {
            fs::create_dir_all(directory)
                .context(format!("Failed to create log directory: {}", directory.display()))?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(&name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(config.max_files)
                .build(directory)?;

            let (writer, guard): (NonBlocking, WorkerGuard) =
                tracing_appender::non_blocking(file_appender);
            layers.push(format_layer(layer().with_writer(writer).with_ansi(false), config.format));
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// This struct holds the background worker guard. Drop it only when the
/// application is shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn format_layer<S, W>(
    base: fmt::Layer<S, DefaultFields, Format, W>,
    format: LogFormat,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Pretty => base.pretty().boxed(),
        LogFormat::Json => base.json().boxed(),
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.directory.is_some() && config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_logger_builder_initial_state() {
        let builder = Logger::builder().name("enum-tour").env_filter("tour_kernel=debug");
        assert!(builder.config.console);
        assert!(builder.config.ansi);
        assert_eq!(builder.config.format, LogFormat::Compact);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("tour_kernel=debug"));
        assert!(builder.config.directory.is_none());
    }

    #[test]
    #[serial]
    fn test_logger_builder_configuration() {
        let builder = Logger::builder()
            .level(LevelFilter::DEBUG)
            .format(LogFormat::Json)
            .directory("logs")
            .max_files(5)
            .name("enum-tour");

        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.format, LogFormat::Json);
        assert_eq!(builder.config.max_files, 5);
        assert_eq!(builder.config.directory.as_deref(), Some(std::path::Path::new("logs")));
    }

    #[test]
    #[serial]
    fn test_invalid_settings_are_rejected_before_init() {
        let err = Logger::builder().name("  ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("enum-tour").directory("logs").max_files(0).init();
        assert!(matches!(err, Err(LoggerError::InvalidConfiguration { .. })));

        let err = Logger::builder().name("enum-tour").env_filter("tour_kernel=loud").init();
        assert!(matches!(err, Err(LoggerError::InvalidConfiguration { .. })));

        let err = Logger::builder().name("enum-tour").console(false).init();
        assert!(matches!(err, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_log_format_parses_from_config_text() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    #[serial]
    fn test_file_logging_setup() -> Result<(), LoggerError> {
        let tmp_dir = tempdir().context("Failed to create temp dir")?;
        let log_dir = tmp_dir.path().join("logs");

        let logger = Logger::builder()
            .name("enum-tour")
            .console(false)
            .directory(&log_dir)
            .level(LevelFilter::INFO)
            .init()?;

        tracing::info!("hello world");
        std::thread::sleep(Duration::from_millis(20));
        assert!(logger.guard().is_some());
        drop(logger);

        assert!(log_dir.exists(), "log directory should be created by logger init");

        let log_names: Vec<String> = fs::read_dir(&log_dir)
            .context("Failed to read log directory")?
            .flatten()
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();

        // Daily rotation names files `<name>.<yyyy-mm-dd>.log`.
        assert!(
            log_names.iter().any(|file| {
                file.starts_with("enum-tour.")
                    && file.ends_with(&format!(".{LOG_FILE_SUFFIX}"))
                    && file.matches('.').count() == 2
            }),
            "expected a daily rolled log file, got {log_names:?}"
        );
        Ok(())
    }
}
