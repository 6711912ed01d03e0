//! Analyze command: regional coverage of company emissions
//!
//! Reports how much of each company's emissions its largest regions account
//! for, across all companies and across the largest emitters.

use super::{load_configuration, setup_logging};
use crate::app::services::aggregators::{
    CompanyRegionProfile, CoverageSummary, company_profiles, summarize_coverage, top_profiles,
};
use crate::app::services::csv_parser::read_table;
use crate::cli::args::{AnalyzeArgs, ReportFormat};
use crate::config::SourceTable;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use tracing::{debug, info};

/// Coverage report over all companies and the largest emitters
#[derive(Debug, Serialize)]
struct CoverageReport {
    all_companies: CoverageSummary,
    top_emitters: CoverageSummary,
    top_emitter_profiles: Vec<CompanyRegionProfile>,
}

/// Run the regional coverage analysis and print the report
pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false);
    debug!("Analyze arguments: {:?}", args);

    args.validate().context("Invalid arguments")?;

    let config = load_configuration(args.input_dir.clone(), None, args.config_file.as_deref())?;

    let path = config.source_path(SourceTable::RegionEmissions);
    let table = read_table(&path, SourceTable::RegionEmissions.label())
        .with_context(|| format!("Failed to read region table '{}'", path.display()))?;

    let profiles = company_profiles(&table, config.aggregation.region_leading_columns);
    let top = top_profiles(&profiles, args.top);
    info!(
        "Analyzing {} companies ({} largest emitters)",
        profiles.len(),
        top.len()
    );

    let report = CoverageReport {
        all_companies: summarize_coverage(&profiles),
        top_emitters: summarize_coverage(&top),
        top_emitter_profiles: top,
    };

    match args.format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize coverage report")?;
            println!("{}", json);
        }
        ReportFormat::Text => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &CoverageReport) {
    print_summary("All Companies", &report.all_companies);
    print_summary(
        &format!("Top {} Emitters", report.top_emitter_profiles.len()),
        &report.top_emitters,
    );

    println!("\n{}", "Largest Emitters".bright_green().bold());
    for (rank, profile) in report.top_emitter_profiles.iter().enumerate() {
        let leading = profile
            .regions
            .first()
            .map(|(region, _)| region.as_str())
            .unwrap_or("-");
        println!(
            "  {:>2}. {} {:.0} across {} regions (largest: {})",
            rank + 1,
            profile.company.bright_white().bold(),
            profile.total,
            profile.region_count(),
            leading
        );
    }
    println!();
}

fn print_summary(title: &str, summary: &CoverageSummary) {
    println!("\n{}", title.bright_green().bold());
    println!(
        "  {} {}",
        "Companies analyzed:".bright_cyan(),
        summary.companies_analyzed
    );

    if let Some(company) = &summary.max_region_company {
        println!(
            "  {} {} ({} regions)",
            "Most regions:".bright_cyan(),
            company,
            summary.max_region_count
        );
    }

    println!("  {}", "Region count distribution:".bright_cyan());
    for bucket in &summary.distribution {
        println!(
            "    {:>2} regions: {} companies",
            bucket.region_count, bucket.companies
        );
    }

    println!("  {}", "Coverage by top regions:".bright_cyan());
    for stat in &summary.coverage {
        println!(
            "    top {}: mean {:.1}%, min {:.1}%, max {:.1}% ({} companies)",
            stat.top_n, stat.mean, stat.min, stat.max, stat.companies
        );
    }
}
