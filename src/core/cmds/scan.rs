use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde::Serialize;

use crate::core::cli::ScanArgs;
use crate::core::scanner;
use crate::core::stats;
use crate::types::config::config;
use crate::types::{AppResult, FileSpill, GroupScan, GroupSummary};

#[derive(Debug, Serialize)]
struct GroupReport {
    summary: GroupSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<FileSpill>>,
}

#[derive(Debug, Serialize)]
struct ScanReport {
    generated_at: DateTime<Utc>,
    marker: String,
    groups: Vec<GroupReport>,
}

pub fn execute_scan(args: ScanArgs) -> AppResult<()> {
    // Resolve command-specific options
    let marker = config().resolve_marker(args.marker.as_deref());
    let ignore = config().scan().ignore().to_vec();

    let roots = expand_paths(&args.paths)?;

    let mut groups = Vec::with_capacity(roots.len());
    for root in &roots {
        let scan = scan_with_progress(root, &marker, &ignore)?;
        let summary = GroupSummary::from_scan(&scan)?;
        groups.push(GroupReport {
            summary,
            files: args.per_file.then_some(scan.files),
        });
    }

    let report = ScanReport {
        generated_at: Utc::now(),
        marker,
        groups,
    };

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        _ => {
            print_table_format(&report);
        }
    }

    Ok(())
}

/// Expand CLI path arguments into scan roots. A literal directory is taken
/// as-is; anything else is treated as a glob pattern whose directory
/// matches become roots.
fn expand_paths(patterns: &[String]) -> AppResult<Vec<PathBuf>> {
    let mut roots: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let path = PathBuf::from(pattern);
        if path.is_dir() {
            roots.push(path);
            continue;
        }

        // Try as glob pattern
        match glob::glob(pattern) {
            Ok(paths) => {
                for entry in paths {
                    match entry {
                        Ok(glob_path) => {
                            if glob_path.is_dir() {
                                roots.push(glob_path);
                            } else {
                                warn!("Skipping non-directory match: {}", glob_path.display());
                            }
                        }
                        Err(e) => {
                            info!("Skipping invalid glob entry: {}", e);
                        }
                    }
                }
            }
            Err(e) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid glob pattern '{}': {}", pattern, e),
                )
                .into());
            }
        }
    }

    if roots.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("No directories matched: {}", patterns.join(", ")),
        )
        .into());
    }

    Ok(roots)
}

/// Like `scanner::scan_group`, with a progress bar over the file list.
/// The bar draws on stderr and hides itself when stderr is not a tty.
fn scan_with_progress(root: &Path, marker: &str, ignore: &[String]) -> AppResult<GroupScan> {
    let paths = scanner::collect_log_files(root, ignore)?;

    let bar = ProgressBar::new(paths.len() as u64);
    let style = ProgressStyle::default_bar()
        .template("[{bar:40}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_message(root.display().to_string());

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match scanner::file_spill_total(&path, marker) {
            Ok(spill) => {
                files.push(FileSpill { path, spill });
                bar.inc(1);
            }
            Err(e) => {
                bar.finish_and_clear();
                return Err(e.into());
            }
        }
    }
    bar.finish_and_clear();

    Ok(GroupScan {
        dir: root.to_path_buf(),
        files,
    })
}

fn print_table_format(report: &ScanReport) {
    info!("Scan Report (marker: {:?})", report.marker);

    for group in &report.groups {
        let s = &group.summary;
        info!("");
        info!("Group: {}", s.dir.display());
        info!(
            "  Files: {}, total spill: {}, min: {}, max: {}, mean: {}",
            s.files,
            s.total,
            s.min,
            s.max,
            stats::format_mean(s.mean)
        );

        if let Some(files) = &group.files {
            for file in files {
                info!("    {}: {}", file.path.display(), file.spill);
            }
        }
    }
}
