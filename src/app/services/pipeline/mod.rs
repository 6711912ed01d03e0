//! Pipeline orchestration from raw source tables to JSON artifacts
//!
//! A run has three phases:
//! 1. [`sources`] reads every table the selected artifacts need, failing
//!    fast on the first missing file
//! 2. [`processor`] merges, enriches and aggregates, rendering each artifact
//!    to a JSON string in memory
//! 3. [`writer`] writes the rendered artifacts
//!
//! Nothing is written until every input has been read and every artifact
//! rendered, so a failed run leaves the output directory untouched.

pub mod processor;
pub mod progress;
pub mod sources;
pub mod writer;

#[cfg(test)]
pub mod tests;

use crate::Result;
use crate::app::models::EnrichmentNote;
use crate::app::services::record_merger::{EnrichmentStats, MergeStats};
use crate::config::{Artifact, Config};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

// Re-export main types for easy access
pub use processor::{BuildReport, RenderedArtifact, build_artifacts};
pub use progress::ProgressReporter;
pub use sources::{LoadedSources, load_sources, required_tables};
pub use writer::{WriteSummary, write_artifacts};

/// Outcome of one artifact in a run
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSummary {
    pub artifact: Artifact,
    pub path: PathBuf,

    /// Top-level entries in the artifact (list items or map keys)
    pub entries: usize,

    /// Size of the rendered JSON in bytes
    pub bytes: usize,
}

/// Report of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub artifacts: Vec<ArtifactSummary>,

    /// Source tables read, with their row counts
    pub tables_loaded: Vec<(String, usize)>,

    pub merge_stats: Option<MergeStats>,
    pub enrichment_stats: Option<EnrichmentStats>,
    pub enrichment_notes: Vec<EnrichmentNote>,

    /// Region names dropped from the region list
    pub dropped_regions: Vec<String>,

    /// Whether artifacts were written (false for dry runs)
    pub written: bool,

    pub duration: Duration,
}

impl PipelineReport {
    /// Total bytes across rendered artifacts
    pub fn total_bytes(&self) -> usize {
        self.artifacts.iter().map(|a| a.bytes).sum()
    }
}

/// Batch pipeline bound to one configuration
pub struct Pipeline {
    config: Config,
    progress: ProgressReporter,
}

impl Pipeline {
    /// Create a pipeline without progress output
    pub fn new(config: Config) -> Self {
        Self {
            config,
            progress: ProgressReporter::disabled(),
        }
    }

    /// Attach a progress reporter
    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the pipeline for the selected artifacts
    ///
    /// With `dry_run` every input is read and every artifact rendered, but
    /// nothing is written.
    pub fn run(&mut self, artifacts: &[Artifact], dry_run: bool) -> Result<PipelineReport> {
        let start = Instant::now();
        let tables = required_tables(artifacts);

        // one step per table, one per artifact, one for writing
        self.progress
            .start((tables.len() + artifacts.len() + 1) as u64);

        let sources = match load_sources(&self.config, &tables, &self.progress) {
            Ok(sources) => sources,
            Err(e) => {
                self.progress.finish_with_error(&e.to_string());
                return Err(e);
            }
        };

        let build = match build_artifacts(&self.config, &sources, artifacts, &self.progress) {
            Ok(build) => build,
            Err(e) => {
                self.progress.finish_with_error(&e.to_string());
                return Err(e);
            }
        };

        let artifact_summaries = build
            .rendered
            .iter()
            .map(|rendered| ArtifactSummary {
                artifact: rendered.artifact,
                path: rendered.path.clone(),
                entries: rendered.entries,
                bytes: rendered.json.len(),
            })
            .collect();

        if dry_run {
            info!("Dry run: {} artifacts rendered, nothing written", build.rendered.len());
            self.progress.finish("Dry run complete");
        } else {
            self.progress.set_message("Writing artifacts");
            self.config.ensure_output_directory()?;
            let summary = write_artifacts(&build.rendered)?;
            self.progress.increment();
            self.progress.finish(&format!(
                "Wrote {} artifacts ({})",
                summary.files_written,
                WriteSummary::format_size(summary.bytes_written)
            ));
        }

        let duration = start.elapsed();
        info!("Completed in {:.2}s", duration.as_secs_f64());

        Ok(PipelineReport {
            artifacts: artifact_summaries,
            tables_loaded: sources.row_counts(),
            merge_stats: build.merge_stats,
            enrichment_stats: build.enrichment_stats,
            enrichment_notes: build.enrichment_notes,
            dropped_regions: build.dropped_regions,
            written: !dry_run,
            duration,
        })
    }
}
