//! Command implementations for the emissions processor CLI
//!
//! This module dispatches subcommands and holds the logging and configuration
//! setup they share.

mod analyze;
mod process;

pub use analyze::run_analyze;
pub use process::run_process;

use crate::cli::args::{Args, Commands};
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main command runner for the emissions processor
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Process(process_args)) => run_process(process_args),
        Some(Commands::Analyze(analyze_args)) => run_analyze(analyze_args),
        None => anyhow::bail!("No command given. Run with --help to see available commands."),
    }
}

/// Set up structured logging on stderr
///
/// RUST_LOG takes precedence over the level derived from CLI flags.
fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("emissions_processor={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using the layered approach (file -> env -> args)
///
/// Without an explicit config file the user config directory is tried, and
/// skipped silently when no file exists there.
fn load_configuration(
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    config_file: Option<&Path>,
) -> Result<Config> {
    let default_config_path = if config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = config_file.or_else(|| {
        default_config_path
            .as_deref()
            .filter(|path| path.exists())
    });

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let config = Config::load_layered(input_dir, output_dir, config_file)
        .context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}
