use serde::{Deserialize, Serialize};

/// A numeric table cell after coercion.
///
/// Source tables mix plain numbers, thousands-separated numbers, empty
/// cells, and placeholder strings such as "N/A" or "-". Anything that
/// does not parse is `Missing`, and `Missing` contributes 0 to every
/// aggregation; a malformed cell never propagates a parse failure.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum FieldValue {
    Number(f64),
    Missing,
}

impl FieldValue {
    /// Coerce a raw CSV cell into a numeric value.
    ///
    /// Trims whitespace and strips thousands separators before parsing.
    /// Commas are accepted only as well-formed separators (groups of
    /// exactly three digits after the first), so a stray comma like
    /// `"1,2"` is `Missing` rather than a silently mangled number.
    pub fn coerce(raw: &str) -> FieldValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Missing;
        }
        let cleaned = if trimmed.contains(',') {
            match strip_thousands(trimmed) {
                Some(stripped) => stripped,
                None => return FieldValue::Missing,
            }
        } else {
            trimmed.to_string()
        };
        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => FieldValue::Number(value),
            _ => FieldValue::Missing,
        }
    }

    /// Numeric value for aggregation purposes; `Missing` counts as 0.
    pub fn as_f64(&self) -> f64 {
        match self {
            FieldValue::Number(value) => *value,
            FieldValue::Missing => 0.0,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

/// Remove the commas from a thousands-grouped number, or reject the cell
/// if its commas do not form valid groups.
fn strip_thousands(raw: &str) -> Option<String> {
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw, None),
    };
    if frac_part.is_some_and(|frac| frac.contains(',')) {
        return None;
    }
    let unsigned = int_part.strip_prefix('-').unwrap_or(int_part);
    let mut groups = unsigned.split(',');
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || !first.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    Some(raw.replace(',', ""))
}
