use std::path::PathBuf;

use serde::Serialize;

use crate::core::stats;
use crate::types::{ScanError, ScanResult};

/// Spill total extracted from one log file.
///
/// 0 when no line in the file carried the marker.
#[derive(Debug, Clone, Serialize)]
pub struct FileSpill {
    pub path: PathBuf,
    pub spill: i64,
}

/// Per-file spill counts collected from one directory group, in sorted
/// path order.
#[derive(Debug, Clone, Serialize)]
pub struct GroupScan {
    pub dir: PathBuf,
    pub files: Vec<FileSpill>,
}

impl GroupScan {
    pub fn totals(&self) -> Vec<i64> {
        self.files.iter().map(|f| f.spill).collect()
    }
}

/// Summary statistics over one group's per-file totals.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub dir: PathBuf,
    pub files: usize,
    pub total: i64,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
}

impl GroupSummary {
    /// Fails with `ScanError::EmptyGroup` when the scan found no files;
    /// the mean of an empty group is undefined, never 0 or NaN.
    pub fn from_scan(scan: &GroupScan) -> ScanResult<GroupSummary> {
        let totals = scan.totals();
        let Some(mean) = stats::mean(&totals) else {
            return Err(ScanError::EmptyGroup {
                dir: scan.dir.clone(),
            });
        };

        let (min, max) = totals
            .iter()
            .fold((i64::MAX, i64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        Ok(GroupSummary {
            dir: scan.dir.clone(),
            files: totals.len(),
            total: totals.iter().sum(),
            min,
            max,
            mean,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_with_totals(totals: &[i64]) -> GroupScan {
        GroupScan {
            dir: PathBuf::from("group"),
            files: totals
                .iter()
                .enumerate()
                .map(|(i, &spill)| FileSpill {
                    path: PathBuf::from(format!("group/{i}.log")),
                    spill,
                })
                .collect(),
        }
    }

    #[test]
    fn summary_over_per_file_totals() {
        let summary = GroupSummary::from_scan(&scan_with_totals(&[2, 4, 6])).expect("non-empty");
        assert_eq!(summary.files, 3);
        assert_eq!(summary.total, 12);
        assert_eq!(summary.min, 2);
        assert_eq!(summary.max, 6);
        assert_eq!(summary.mean, 4.0);
    }

    #[test]
    fn empty_scan_is_an_explicit_error() {
        let err = GroupSummary::from_scan(&scan_with_totals(&[])).unwrap_err();
        assert!(matches!(err, ScanError::EmptyGroup { .. }));
    }

    #[test]
    fn single_file_group() {
        let summary = GroupSummary::from_scan(&scan_with_totals(&[7])).expect("non-empty");
        assert_eq!(summary.min, 7);
        assert_eq!(summary.max, 7);
        assert_eq!(summary.mean, 7.0);
    }
}
