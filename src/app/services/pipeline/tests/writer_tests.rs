//! Tests for artifact writing

use super::super::processor::RenderedArtifact;
use super::super::writer::{WriteSummary, write_artifacts};
use crate::config::Artifact;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn rendered(artifact: Artifact, path: PathBuf, json: &str) -> RenderedArtifact {
    RenderedArtifact {
        artifact,
        path,
        entries: 1,
        json: json.to_string(),
    }
}

#[test]
fn test_writes_every_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let artifacts = vec![
        rendered(Artifact::FundList, temp_dir.path().join("fund-list.json"), "[]"),
        rendered(Artifact::GradeMap, temp_dir.path().join("grade.json"), "{}"),
    ];

    let summary = write_artifacts(&artifacts).unwrap();

    assert_eq!(summary.files_written, 2);
    assert_eq!(summary.bytes_written, 4);
    assert_eq!(fs::read_to_string(&artifacts[0].path).unwrap(), "[]");
    assert_eq!(fs::read_to_string(&artifacts[1].path).unwrap(), "{}");

    // only the artifacts remain, no staging files
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

#[test]
fn test_replaces_existing_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fund-list.json");
    fs::write(&path, "old").unwrap();

    write_artifacts(&[rendered(Artifact::FundList, path.clone(), "[1]")]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[1]");
}

#[test]
fn test_staging_failure_leaves_destinations_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("fund-list.json");
    fs::write(&existing, "old").unwrap();
    let fresh = temp_dir.path().join("grade.json");

    let artifacts = vec![
        rendered(Artifact::FundList, existing.clone(), "new"),
        rendered(Artifact::GradeMap, fresh.clone(), "{}"),
        rendered(
            Artifact::CoalUsageMap,
            temp_dir.path().join("missing-dir").join("coal.json"),
            "{}",
        ),
    ];

    assert!(write_artifacts(&artifacts).is_err());
    assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
    assert!(!fresh.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_format_size() {
    assert_eq!(WriteSummary::format_size(512), "512 B");
    assert_eq!(WriteSummary::format_size(2048), "2.0 KB");
}
