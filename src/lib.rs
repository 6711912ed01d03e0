//! Emissions Processor Library
//!
//! A Rust library for turning corporate greenhouse-gas spreadsheet exports
//! (CSV with Chinese column headers) into the normalized JSON datasets read by
//! the presentation layer.
//!
//! This library provides tools for:
//! - Parsing quoted/escaped CSV exports into ordered rows
//! - Normalizing locale-formatted numeric cells into numbers or "absent"
//! - Merging basic and advanced company tables by company short name
//! - Enriching companies with tax identifier, full name and representative region
//! - Aggregating regional emissions, industry counts, top emitters and coal usage
//! - Deriving fund-level holding ratios
//! - Writing pretty-printed JSON artifacts, all-or-nothing

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CompanyRecord, FundRecord, RawRow, RawTable, RegionEmission};
pub use config::Config;

/// Result type alias for the emissions processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for emissions processing operations
///
/// Only conditions that abort a run are errors. Malformed numbers, join misses
/// and empty tables are handled in-band and never surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A required source table could not be found
    #[error("Required source table '{table}' not found at: {path}")]
    SourceNotFound { table: String, path: String },

    /// JSON serialization or deserialization failed
    #[error("JSON error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a missing source table error
    pub fn source_not_found(table: impl Into<String>, path: impl Into<String>) -> Self {
        Self::SourceNotFound {
            table: table.into(),
            path: path.into(),
        }
    }

    /// Create a JSON serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
