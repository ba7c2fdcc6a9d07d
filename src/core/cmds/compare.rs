use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::core::cli::CompareArgs;
use crate::core::scanner;
use crate::core::stats;
use crate::types::config::config;
use crate::types::{AppResult, Condition, GroupSummary};

#[derive(Debug, Serialize)]
struct SuiteComparison {
    suite: String,
    baseline: GroupSummary,
    restricted: GroupSummary,
}

#[derive(Debug, Serialize)]
struct CompareReport {
    generated_at: DateTime<Utc>,
    marker: String,
    suites: Vec<SuiteComparison>,
}

pub fn execute_compare(args: CompareArgs) -> AppResult<()> {
    // Resolve command-specific options
    let baseline_dir = config().resolve_baseline_dir(args.baseline_dir.as_deref());
    let restricted_dir = config().resolve_restricted_dir(args.restricted_dir.as_deref());
    let suites = config().resolve_suites(&args.suites);
    let marker = config().resolve_marker(args.marker.as_deref());
    let ignore = config().scan().ignore().to_vec();

    let report =
        generate_compare_report(&baseline_dir, &restricted_dir, &suites, &marker, &ignore)?;

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        _ => {
            print_mean_lines(&report);
        }
    }

    Ok(())
}

fn generate_compare_report(
    baseline_dir: &Path,
    restricted_dir: &Path,
    suites: &[String],
    marker: &str,
    ignore: &[String],
) -> AppResult<CompareReport> {
    let mut comparisons = Vec::with_capacity(suites.len());
    for suite in suites {
        debug!("Comparing suite {suite}");
        let baseline = summarize_group(&baseline_dir.join(suite), marker, ignore)?;
        let restricted = summarize_group(&restricted_dir.join(suite), marker, ignore)?;
        comparisons.push(SuiteComparison {
            suite: suite.clone(),
            baseline,
            restricted,
        });
    }

    Ok(CompareReport {
        generated_at: Utc::now(),
        marker: marker.to_string(),
        suites: comparisons,
    })
}

fn summarize_group(root: &Path, marker: &str, ignore: &[String]) -> AppResult<GroupSummary> {
    let scan = scanner::scan_group(root, marker, ignore)?;
    Ok(GroupSummary::from_scan(&scan)?)
}

/// The report lines go to stdout, not the logger: they are the program's
/// output contract, one line per suite and condition, baseline first.
fn print_mean_lines(report: &CompareReport) {
    for comparison in &report.suites {
        print_mean_line(
            &comparison.suite,
            Condition::Baseline,
            comparison.baseline.mean,
        );
        print_mean_line(
            &comparison.suite,
            Condition::Restricted,
            comparison.restricted.mean,
        );
    }
}

fn print_mean_line(suite: &str, condition: Condition, mean: f64) {
    println!("{suite} {condition} mean spill:{}", stats::format_mean(mean));
}
