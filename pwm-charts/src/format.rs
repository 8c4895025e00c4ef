//! Presentation-layer formatting for the scalar metric displays.
//!
//! Formatting is layered on top of the numeric results; it is not part
//! of the aggregator contracts.

use crate::metrics::MetricValue;

/// Text shown when a metric has no underlying data.
pub const NO_DATA_TEXT: &str = "No Data";

/// Format a number with thousands separators, rounded to the nearest
/// whole unit (the metric cards show whole tons / facilities / people).
pub fn thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Render a metric for a display card: formatted number, optional unit
/// suffix, or the "No Data" sentinel text.
pub fn metric_text(metric: MetricValue, unit: &str) -> String {
    match metric.value() {
        Some(value) if unit.is_empty() => thousands(value),
        Some(value) => format!("{} {}", thousands(value), unit),
        None => NO_DATA_TEXT.to_string(),
    }
}
