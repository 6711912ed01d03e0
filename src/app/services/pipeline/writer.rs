//! Writing rendered artifacts

use super::processor::RenderedArtifact;
use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Totals of a write pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteSummary {
    pub files_written: usize,
    pub bytes_written: usize,
}

impl WriteSummary {
    /// Format a byte count for display
    pub fn format_size(bytes: usize) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }
}

/// Write each rendered artifact to its path, all or nothing
///
/// Every artifact is first staged in a temporary file next to its
/// destination; destinations are only replaced once all of them are staged.
/// A staging failure leaves every destination untouched. The destination
/// directories must already exist.
pub fn write_artifacts(rendered: &[RenderedArtifact]) -> Result<WriteSummary> {
    let mut staged = Vec::with_capacity(rendered.len());
    for artifact in rendered {
        staged.push((stage_artifact(artifact)?, artifact));
    }
    debug!("Staged {} artifacts", staged.len());

    let mut summary = WriteSummary::default();
    for (file, artifact) in staged {
        file.persist(&artifact.path).map_err(|e| {
            Error::io(
                format!("Failed to write artifact '{}'", artifact.path.display()),
                e.error,
            )
        })?;

        info!(
            "Saved {} ({} entries) to: {}",
            artifact.artifact,
            artifact.entries,
            artifact.path.display()
        );
        summary.files_written += 1;
        summary.bytes_written += artifact.json.len();
    }

    Ok(summary)
}

/// Write an artifact to a temporary file in its destination directory
fn stage_artifact(artifact: &RenderedArtifact) -> Result<NamedTempFile> {
    let directory = match artifact.path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let stage_error = |e| {
        Error::io(
            format!("Failed to stage artifact '{}'", artifact.path.display()),
            e,
        )
    };

    let mut file = NamedTempFile::new_in(directory).map_err(stage_error)?;
    file.write_all(artifact.json.as_bytes()).map_err(stage_error)?;
    file.flush().map_err(stage_error)?;
    Ok(file)
}
