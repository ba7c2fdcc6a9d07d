//! Summary statistics over per-file spill totals.

/// Arithmetic mean; `None` for an empty slice so callers surface the
/// empty-group case explicitly instead of reporting 0 or NaN.
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().sum();
    Some(sum as f64 / values.len() as f64)
}

/// Render a mean for the report lines: integral values keep a trailing
/// `.0` (`4.0`), fractional values print at full precision.
pub fn format_mean(mean: f64) -> String {
    if mean.fract() == 0.0 {
        format!("{mean:.1}")
    } else {
        format!("{mean}")
    }
}
