//! Process command: raw CSV exports to JSON artifacts

use super::{load_configuration, setup_logging};
use crate::app::services::pipeline::{Pipeline, PipelineReport, ProgressReporter, WriteSummary};
use crate::cli::args::ProcessArgs;
use anyhow::{Context, Result};
use colored::*;
use indicatif::HumanDuration;
use tracing::{debug, info};

/// Run the pipeline for the selected artifacts and print a summary
pub fn run_process(args: ProcessArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet);

    info!("Starting emissions processor");
    debug!("Process arguments: {:?}", args);

    args.validate().context("Invalid arguments")?;

    let config = load_configuration(
        args.input_dir.clone(),
        args.output_dir.clone(),
        args.config_file.as_deref(),
    )?;

    let artifacts = args.selected_artifacts();
    info!(
        "Building {} artifacts from {}",
        artifacts.len(),
        config.input_dir.display()
    );

    let progress = if args.show_progress() {
        ProgressReporter::new()
    } else {
        ProgressReporter::disabled()
    };

    let mut pipeline = Pipeline::new(config).with_progress(progress);
    let report = pipeline
        .run(&artifacts, args.dry_run)
        .context("Processing failed, no artifacts were written")?;

    if !args.quiet {
        print_summary(&report, &pipeline.config().output_dir.display().to_string());
    }

    Ok(())
}

/// Print a human-readable summary of a run to stdout
fn print_summary(report: &PipelineReport, output_dir: &str) {
    if report.written {
        println!("\n{}", "Processing Complete".bright_green().bold());
    } else {
        println!("\n{}", "Dry Run Complete (nothing written)".bright_yellow().bold());
    }

    println!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(report.duration)
    );
    println!("  {} {}", "Output directory:".bright_cyan(), output_dir);

    for (table, rows) in &report.tables_loaded {
        println!(
            "  {} {} ({} rows)",
            "Read:".bright_cyan(),
            table,
            rows.to_string().bright_white()
        );
    }

    if let Some(merge) = &report.merge_stats {
        println!(
            "  {} {} companies, {} with advanced metrics",
            "Merged:".bright_cyan(),
            merge.basic_rows.to_string().bright_white().bold(),
            merge.matched
        );
    }

    if let Some(enrichment) = &report.enrichment_stats {
        println!(
            "  {} {}/{} companies ({:.1}%)",
            "Enriched:".bright_cyan(),
            enrichment.fully_enriched.to_string().bright_white().bold(),
            enrichment.total_records,
            enrichment.enrichment_rate()
        );
    }

    println!("\n{}", "Artifacts".bright_green().bold());
    for artifact in &report.artifacts {
        let file_name = artifact
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| artifact.path.display().to_string());
        println!(
            "  {} {} entries, {}",
            format!("{}:", file_name).bright_cyan(),
            artifact.entries.to_string().bright_white(),
            WriteSummary::format_size(artifact.bytes)
        );
    }
    println!(
        "  {} {}",
        "Total size:".bright_cyan(),
        WriteSummary::format_size(report.total_bytes()).bright_white().bold()
    );

    if !report.enrichment_notes.is_empty() {
        println!(
            "\n{} {} companies could not be fully enriched (see warnings above)",
            "Note:".bright_yellow(),
            report.enrichment_notes.len()
        );
    }

    if !report.dropped_regions.is_empty() {
        println!(
            "{} unrecognized regions dropped: {}",
            "Note:".bright_yellow(),
            report.dropped_regions.join(", ")
        );
    }

    println!();
}
