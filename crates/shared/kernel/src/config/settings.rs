use crate::lessons::Lesson;
use serde::Deserialize;
use std::path::PathBuf;
use tour_logger::LogFormat;

/// Top-level settings for a tour run.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub logging: LoggingConfig,
    pub lessons: LessonsConfig,
}

/// Diagnostics settings, handed to the logger builder by the shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Env-filter directives, e.g. `info` or `tour_kernel=debug`.
    /// When unset, `RUST_LOG` applies, falling back to `info`.
    pub filter: Option<String>,
    pub format: LogFormat,
    pub ansi: bool,
    /// Mirror diagnostics into rolling files under this directory.
    pub directory: Option<PathBuf>,
}

/// Which lessons to leave out of the run.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LessonsConfig {
    pub skip: Vec<Lesson>,
}

impl LessonsConfig {
    #[must_use]
    pub fn is_enabled(&self, lesson: Lesson) -> bool {
        !self.skip.contains(&lesson)
    }
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, format: LogFormat::default(), ansi: true, directory: None }
    }
}
