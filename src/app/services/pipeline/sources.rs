//! Loading the source tables a run needs

use super::progress::ProgressReporter;
use crate::app::models::RawTable;
use crate::app::services::csv_parser::read_table;
use crate::config::{Artifact, Config, SourceTable};
use crate::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Source tables read for a run
#[derive(Debug, Clone, Default)]
pub struct LoadedSources {
    tables: BTreeMap<SourceTable, RawTable>,
}

impl LoadedSources {
    /// Create an empty set of sources
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parsed table
    pub fn insert(&mut self, table: SourceTable, raw: RawTable) {
        self.tables.insert(table, raw);
    }

    /// Get a loaded table
    pub fn table(&self, table: SourceTable) -> Result<&RawTable> {
        self.tables
            .get(&table)
            .ok_or_else(|| Error::configuration(format!("Source table '{}' was not loaded", table)))
    }

    /// Check whether a table was loaded
    pub fn contains(&self, table: SourceTable) -> bool {
        self.tables.contains_key(&table)
    }

    /// Loaded tables with their data row counts
    pub fn row_counts(&self) -> Vec<(String, usize)> {
        self.tables
            .iter()
            .map(|(table, raw)| (table.label().to_string(), raw.len()))
            .collect()
    }
}

/// Union of the source tables the given artifacts need
pub fn required_tables(artifacts: &[Artifact]) -> BTreeSet<SourceTable> {
    artifacts
        .iter()
        .flat_map(|artifact| artifact.required_sources().iter().copied())
        .collect()
}

/// Read and parse every requested table
///
/// Stops at the first table that cannot be read; nothing has been written at
/// that point.
pub fn load_sources(
    config: &Config,
    tables: &BTreeSet<SourceTable>,
    progress: &ProgressReporter,
) -> Result<LoadedSources> {
    let mut sources = LoadedSources::new();

    for &table in tables {
        let path = config.source_path(table);
        progress.set_message(&format!("Reading {}", table));
        info!("Reading {} table from: {}", table, path.display());

        let raw = read_table(&path, table.label())?;
        info!("Parsed {} records from {} table", raw.len(), table);

        sources.insert(table, raw);
        progress.increment();
    }

    Ok(sources)
}
