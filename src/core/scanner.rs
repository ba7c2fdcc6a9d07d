//! Directory traversal and per-file spill count extraction.
//!
//! A "log file" is any regular file beneath a group root; any of its lines
//! containing the marker substring must carry a colon-delimited integer,
//! and those integers are summed per file. Parsing is line-local and
//! fail-fast: a marker line that does not parse aborts the scan instead of
//! being skipped.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

use crate::types::{FileSpill, GroupScan, ScanError, ScanResult};

/// Compile ignore globs into one matcher; invalid patterns are skipped.
fn build_ignore_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Recursively enumerate regular files beneath `root`, skipping paths
/// matched by the ignore globs. The list is sorted so per-file output and
/// group means are deterministic across platforms.
pub fn collect_log_files(root: &Path, ignore: &[String]) -> ScanResult<Vec<PathBuf>> {
    let ignore_set = build_ignore_set(ignore);
    let mut files = Vec::new();
    walk_into(root, &ignore_set, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_into(dir: &Path, ignore_set: &GlobSet, files: &mut Vec<PathBuf>) -> ScanResult<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if ignore_set.is_match(&path) {
            continue;
        }
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            walk_into(&path, ignore_set, files)?;
        }
    }
    Ok(())
}

/// Sum the marker values of one file.
///
/// For every line containing `marker`, the line is split on its first
/// colon and the trimmed suffix is parsed as an integer. A marker line
/// with no colon, or with a non-numeric suffix, is a parse error.
pub fn file_spill_total(path: &Path, marker: &str) -> ScanResult<i64> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut total: i64 = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.contains(marker) {
            continue;
        }
        let suffix = match line.split_once(':') {
            Some((_, suffix)) => suffix.trim(),
            None => return Err(parse_error(path, index, &line)),
        };
        match suffix.parse::<i64>() {
            Ok(value) => total += value,
            Err(_) => return Err(parse_error(path, index, &line)),
        }
    }

    Ok(total)
}

fn parse_error(path: &Path, index: usize, line: &str) -> ScanError {
    ScanError::Parse {
        path: path.to_path_buf(),
        line: index + 1,
        content: line.to_string(),
    }
}

/// Scan one directory group: every log file beneath `root` becomes one
/// `FileSpill`, 0 when nothing in the file matched.
pub fn scan_group(root: &Path, marker: &str, ignore: &[String]) -> ScanResult<GroupScan> {
    let paths = collect_log_files(root, ignore)?;
    debug!("Scanning {} files under {}", paths.len(), root.display());

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let spill = file_spill_total(&path, marker)?;
        files.push(FileSpill { path, spill });
    }

    Ok(GroupScan {
        dir: root.to_path_buf(),
        files,
    })
}
