use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aikiosk::config::Config;
use aikiosk::ui;

/// Guided AI experience kiosk for the terminal.
#[derive(Debug, Parser)]
#[command(name = "aikiosk", version, about)]
struct Args {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the backend base URL from the config file.
    #[arg(long)]
    backend_url: Option<String>,

    /// Log filter for the log file (e.g. "info" or "aikiosk=debug").
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = args.backend_url {
        config.backend.base_url = url;
    }
    config.validate()?;

    init_tracing(&args.log_level)?;
    tracing::info!(backend = %config.backend.base_url, "starting kiosk");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    ui::run(config, runtime.handle().clone())?;
    Ok(())
}

/// Logs go to a file; the terminal itself belongs to the TUI.
fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("aikiosk");
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory '{}'", dir.display()))?;
    let path = dir.join("aikiosk.log");
    let file = fs::File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
