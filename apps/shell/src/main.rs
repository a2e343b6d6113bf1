use std::io;
use std::path::PathBuf;
use tour_kernel::{TourConfig, load_config, run_all};
use tour_logger::Logger;
use tracing::info;

/// Points at a config file; without it an optional `tour.*` in the working directory is used.
const CONFIG_PATH_VAR: &str = "TOUR_CONFIG";

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    let cfg: TourConfig = load_config(config_path)?;

    let mut builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .format(cfg.logging.format)
        .ansi(cfg.logging.ansi);
    if let Some(filter) = &cfg.logging.filter {
        builder = builder.env_filter(filter.clone());
    }
    if let Some(directory) = &cfg.logging.directory {
        builder = builder.directory(directory.clone());
    }
    let _logger = builder.init()?;

    let ran = run_all(&mut io::stdout().lock(), &cfg)?;
    info!(ran, "Enum tour complete");

    Ok(())
}
