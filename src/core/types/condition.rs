use serde::Serialize;
use strum::Display;

/// Experiment variant a directory group belongs to.
///
/// Purely a labeling/partitioning key: the report lines and JSON fields use
/// the lowercase names, and compare output always lists baseline before
/// restricted within a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Baseline,
    Restricted,
}
