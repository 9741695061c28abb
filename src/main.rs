use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod tui;

use config::{Config, CONFIG_FILE};

fn main() -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILE);
    let config = Config::load_or_default(path).context("loading configuration")?;

    // stderr shares the terminal with the board, so logs go to a file.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log.file)
        .with_context(|| format!("opening log file {}", config.log.file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    if !path.exists() {
        info!("config file {} not found, using defaults", CONFIG_FILE);
    }

    tui::run(&config).context("terminal UI failed")?;
    Ok(())
}
