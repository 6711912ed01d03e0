//! Command-line argument definitions for the emissions processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::Artifact;
use crate::constants::DEFAULT_TOP_N;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the emissions processor
///
/// Turns corporate greenhouse-gas spreadsheet exports (CSV) into the
/// normalized JSON datasets read by the presentation layer.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "emissions-processor",
    version,
    about = "Transform greenhouse-gas spreadsheet exports from CSV into JSON datasets",
    long_about = "Reads the raw company, region, fund and coal usage spreadsheet exports, \
                  merges and enriches company records, computes regional, industry and fund \
                  aggregates, and writes pretty-printed JSON artifacts. A run either writes \
                  every selected artifact or nothing."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Transform raw CSV exports into JSON artifacts
    Process(ProcessArgs),
    /// Report how much of each company's emissions its top regions cover
    Analyze(AnalyzeArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Directory holding the raw CSV exports
    ///
    /// Overrides the config file and the EMISSIONS_INPUT_DIR environment
    /// variable. Defaults to ./raw-data
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Directory holding the raw CSV exports"
    )]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving the JSON artifacts
    ///
    /// Created if it doesn't exist. Overrides the config file and the
    /// EMISSIONS_OUTPUT_DIR environment variable. Defaults to ./app/assets/data
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory receiving the JSON artifacts"
    )]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON configuration file for file names and aggregation settings. If
    /// not specified, uses the user config directory's
    /// emissions-processor/config.json when present
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Artifacts to build (comma-separated list)
    ///
    /// Only the source tables these artifacts need are read. If not
    /// specified, every artifact is built.
    #[arg(
        short = 'a',
        long = "artifacts",
        value_name = "LIST",
        value_enum,
        value_delimiter = ',',
        help = "Comma-separated list of artifacts to build"
    )]
    pub artifacts: Vec<Artifact>,

    /// Read and transform everything without writing any files
    #[arg(
        long = "dry-run",
        help = "Read and transform inputs without writing output files"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Disable the progress bar
    #[arg(long = "no-progress", help = "Disable the progress bar")]
    pub no_progress: bool,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Directory holding the raw CSV exports
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Directory holding the raw CSV exports"
    )]
    pub input_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Report format
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the coverage report"
    )]
    pub format: ReportFormat,

    /// Number of largest emitters analysed separately
    #[arg(
        long = "top",
        value_name = "N",
        default_value_t = DEFAULT_TOP_N,
        help = "Number of largest emitters analysed separately"
    )]
    pub top: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,
}

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text
    Text,
    /// JSON for scripting
    Json,
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_dir) = &self.input_dir {
            if !input_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Input directory does not exist: {}",
                    input_dir.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Artifacts to build, every artifact when none was selected
    pub fn selected_artifacts(&self) -> Vec<Artifact> {
        if self.artifacts.is_empty() {
            Artifact::ALL.to_vec()
        } else {
            let mut selected = self.artifacts.clone();
            selected.sort();
            selected.dedup();
            selected
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.top == 0 {
            return Err(Error::configuration("--top must be at least 1"));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
