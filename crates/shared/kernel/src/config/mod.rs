mod settings;

pub use self::settings::{LessonsConfig, LoggingConfig, TourConfig};

use crate::error::{TourError, TourErrorExt};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// File stem searched for when no explicit path is given (`tour.toml`, `tour.json`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "tour";
/// Prefix for environment overrides (`TOUR__LOGGING__FILTER=debug`).
pub const ENV_PREFIX: &str = "TOUR";

/// Loads configuration by layering an optional file under environment overrides.
///
/// 1. **Base File**: `path` when given (and then it must exist), otherwise an optional
///    `tour.*` file in the current working directory.
/// 2. **Environment Overrides**: variables prefixed with `TOUR__`, nested with double
///    underscores (e.g., `TOUR__LOGGING__FORMAT` maps to `logging.format`).
///    `TOUR__LESSONS__SKIP` takes a comma separated list.
///
/// # Errors
/// Returns [`TourError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values don't fit `T`.
///
/// # Example
/// ```rust
/// use tour_kernel::config::{TourConfig, load_config};
///
/// let cfg: TourConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.lessons.skip.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, TourError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .convert_case(config::Case::Snake)
        .list_separator(",")
        .with_list_parse_key("lessons.skip")
        .try_parsing(true)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, TourError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_STEM), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
