use crate::field_value::FieldValue;
use crate::region::{self, Region};
use std::collections::HashMap;

/// One row of a yearly waste table: a region name plus the coerced
/// numeric fields, keyed by column header.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyRecord {
    region_name: String,
    fields: HashMap<String, FieldValue>,
}

impl YearlyRecord {
    pub fn new(region_name: impl Into<String>, fields: HashMap<String, FieldValue>) -> Self {
        YearlyRecord {
            region_name: region_name.into(),
            fields,
        }
    }

    pub fn region_name(&self) -> &str {
        &self.region_name
    }

    /// The parsed region, or `None` for unknown names and the nationwide
    /// aggregate row.
    pub fn region(&self) -> Option<Region> {
        Region::from_name(&self.region_name)
    }

    /// Whether this row is the precomputed nationwide total.
    pub fn is_aggregate_row(&self) -> bool {
        region::is_aggregate_name(&self.region_name)
    }

    /// Numeric value of a column; missing or malformed cells are 0.
    pub fn field(&self, column: &str) -> f64 {
        self.field_value(column).as_f64()
    }

    pub fn field_value(&self, column: &str) -> FieldValue {
        self.fields
            .get(column)
            .copied()
            .unwrap_or(FieldValue::Missing)
    }
}
