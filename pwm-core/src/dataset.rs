use crate::field_value::FieldValue;
use crate::record::YearlyRecord;
use crate::region::Region;
use anyhow::{anyhow, Context};
use csv::ReaderBuilder;
use std::collections::HashMap;

/// First calendar year covered by the waste tables.
pub const YEAR_MIN: i32 = 2015;
/// Last calendar year covered by the waste tables.
pub const YEAR_MAX: i32 = 2022;

/// Header of the region-name column in the waste tables.
pub const REGION_COLUMN: &str = "Region";

pub fn year_in_range(year: i32) -> bool {
    (YEAR_MIN..=YEAR_MAX).contains(&year)
}

/// All configured years, ascending.
pub fn year_range() -> impl Iterator<Item = i32> {
    YEAR_MIN..=YEAR_MAX
}

/// All rows of one waste table for a single calendar year.
///
/// Immutable after load; every aggregation is a pure function over a
/// borrowed dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyDataset {
    year: i32,
    records: Vec<YearlyRecord>,
}

impl YearlyDataset {
    pub fn new(year: i32, records: Vec<YearlyRecord>) -> Self {
        YearlyDataset { year, records }
    }

    /// Parse one yearly waste table from CSV text.
    ///
    /// The region column is matched by header name (case-insensitive,
    /// falling back to the first column); every other column is coerced
    /// to a numeric field. Rows with an empty region name are skipped.
    pub fn from_csv(year: i32, csv_data: &str) -> anyhow::Result<YearlyDataset> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr
            .headers()
            .with_context(|| format!("waste table for {year} has no header row"))?
            .clone();
        if headers.is_empty() {
            return Err(anyhow!("waste table for {year} has an empty header row"));
        }
        let region_idx = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(REGION_COLUMN))
            .unwrap_or(0);

        let mut records = Vec::new();
        for result in rdr.records() {
            let row = result.with_context(|| format!("bad CSV row in waste table {year}"))?;
            let region_name = row.get(region_idx).unwrap_or("").trim();
            if region_name.is_empty() {
                continue;
            }

            let mut fields = HashMap::new();
            for (idx, header) in headers.iter().enumerate() {
                if idx == region_idx {
                    continue;
                }
                let cell = row.get(idx).unwrap_or("");
                fields.insert(header.trim().to_string(), FieldValue::coerce(cell));
            }
            records.push(YearlyRecord::new(region_name, fields));
        }

        log::info!("waste table {}: loaded {} rows", year, records.len());
        Ok(YearlyDataset { year, records })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn records(&self) -> &[YearlyRecord] {
        &self.records
    }

    /// Rows matching a region filter.
    ///
    /// With a filter, yields every row whose region name parses to that
    /// region (tables may carry more than one row per region). Without
    /// one, yields all rows except the nationwide aggregate sentinel row,
    /// so nationwide sums never double count.
    pub fn matching(&self, region: Option<Region>) -> impl Iterator<Item = &YearlyRecord> {
        self.records.iter().filter(move |record| match region {
            Some(wanted) => record.region() == Some(wanted),
            None => !record.is_aggregate_row(),
        })
    }

    /// Distinct region names observed in the table, in row order.
    /// Feeds the region selector control.
    pub fn region_names(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.records {
            if record.is_aggregate_row() {
                continue;
            }
            if !seen.iter().any(|name: &String| name == record.region_name()) {
                seen.push(record.region_name().to_string());
            }
        }
        seen
    }
}
