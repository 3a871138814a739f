use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tenkey::config::Config;
use tenkey::ui;

/// A ten-key calculator for the terminal.
#[derive(Debug, Parser)]
#[command(name = "tenkey", version, about)]
struct Cli {
    /// Path to a config file (default: the platform config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file. Without it, logging is off — stdout
    /// belongs to the UI.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Override the redraw tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file '{}'", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tenkey=debug")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.ui.tick_ms = tick_ms;
    }
    config
        .validate()
        .context("invalid configuration")?;
    tracing::info!(?config, "config loaded");

    ui::runtime::run(&config).context("terminal ui failed")?;
    Ok(())
}
