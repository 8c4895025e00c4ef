use pwm_core::columns::{FACILITY_COLUMNS, POPULATION_COLUMN, TOTAL_WASTE_COLUMNS};
use pwm_core::dataset::YearlyDataset;
use pwm_core::region::{Region, REGION_COUNT};
use serde::{Deserialize, Serialize};

/// Result of a metric aggregation.
///
/// An aggregate of exactly zero means no matching rows or fully
/// non-numeric data, so it is reported as the `NoData` sentinel rather
/// than the numeral 0; the display layer renders it as "No Data".
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum MetricValue {
    NoData,
    Value(f64),
}

impl MetricValue {
    /// Wrap a raw aggregate, mapping exact zero to `NoData`.
    pub fn from_total(total: f64) -> MetricValue {
        if total == 0.0 {
            MetricValue::NoData
        } else {
            MetricValue::Value(total)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            MetricValue::Value(v) => Some(*v),
            MetricValue::NoData => None,
        }
    }
}

/// Raw sum of the named columns over rows matching the region filter.
///
/// Nationwide (no filter) excludes the aggregate sentinel row. Missing
/// and malformed cells contribute 0, never an error. This is the
/// unwrapped form used where a plain 0 is wanted (trend points); the
/// metric displays go through [`total_sum`].
pub fn sum_columns(dataset: &YearlyDataset, region: Option<Region>, columns: &[&str]) -> f64 {
    dataset
        .matching(region)
        .map(|record| columns.iter().map(|col| record.field(col)).sum::<f64>())
        .sum()
}

/// Total-sum metric over a named column set.
pub fn total_sum(dataset: &YearlyDataset, region: Option<Region>, columns: &[&str]) -> MetricValue {
    MetricValue::from_total(sum_columns(dataset, region, columns))
}

/// The "Waste Generated" metric: total hazardous wastes.
pub fn waste_generated(dataset: &YearlyDataset, region: Option<Region>) -> MetricValue {
    total_sum(dataset, region, &TOTAL_WASTE_COLUMNS)
}

/// The "Waste Disposal Facilities" metric: sum of the fixed
/// facility-type count columns.
pub fn facility_count(dataset: &YearlyDataset, region: Option<Region>) -> MetricValue {
    total_sum(dataset, region, &FACILITY_COLUMNS)
}

/// The "Average Population Density" metric.
///
/// With a region filter, the population of that region (summed over its
/// matching rows). Without one, the nationwide population total divided
/// by the fixed count of 17 regions, using truncating integer division:
/// a mean-of-regions approximation, not a population-weighted mean.
pub fn average_density(dataset: &YearlyDataset, region: Option<Region>) -> MetricValue {
    let total = sum_columns(dataset, region, &[POPULATION_COLUMN]);
    match region {
        Some(_) => MetricValue::from_total(total),
        None => {
            let mean = total.trunc() as u64 / u64::from(REGION_COUNT);
            MetricValue::from_total(mean as f64)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pwm_core::dataset::YearlyDataset;

    const FIXTURE: &str = "\
Region,Total Hazardous Wastes,Materials Recovery Facility,Sanitary Landfill,Registered TSD Facilities,Population
Region IV-A,120,3,1,2,7000000
Region IV-A,0,0,0,0,0
Region IV-A,N/A,1,0,1,500000
Region IV-A,30,2,1,0,800000
Region V,55,4,2,1,6000000
Philippines,205,10,4,4,100000000
";

    fn dataset() -> YearlyDataset {
        YearlyDataset::from_csv(2015, FIXTURE).unwrap()
    }

    #[test]
    fn test_total_sum_with_region_filter_coerces_malformed_to_zero() {
        // four Region IV-A rows: 120 + 0 + "N/A" + 30 = 150
        let value = waste_generated(&dataset(), Some(Region::Calabarzon));
        assert_eq!(value, MetricValue::Value(150.0));
    }

    #[test]
    fn test_total_sum_nationwide_excludes_aggregate_row() {
        // 150 + 55, not + the Philippines row's 205
        let value = waste_generated(&dataset(), None);
        assert_eq!(value, MetricValue::Value(205.0));
    }

    #[test]
    fn test_total_sum_is_non_negative_for_all_filters() {
        let ds = dataset();
        for region in Region::ALL {
            let total = sum_columns(&ds, Some(region), &pwm_core::columns::TOTAL_WASTE_COLUMNS);
            assert!(total >= 0.0, "negative total for {region}");
        }
        assert!(sum_columns(&ds, None, &pwm_core::columns::TOTAL_WASTE_COLUMNS) >= 0.0);
    }

    #[test]
    fn test_facility_count_over_fixed_column_set() {
        let value = facility_count(&dataset(), Some(Region::Calabarzon));
        // (3+1+2) + 0 + (1+0+1) + (2+1+0) = 11
        assert_eq!(value, MetricValue::Value(11.0));
    }

    #[test]
    fn test_zero_aggregate_reports_no_data_sentinel() {
        let ds = dataset();
        // Region VII has no rows at all
        assert_eq!(waste_generated(&ds, Some(Region::CentralVisayas)), MetricValue::NoData);
        assert_eq!(facility_count(&ds, Some(Region::CentralVisayas)), MetricValue::NoData);
        assert_eq!(average_density(&ds, Some(Region::CentralVisayas)), MetricValue::NoData);
    }

    #[test]
    fn test_average_density_with_filter_is_region_population() {
        let value = average_density(&dataset(), Some(Region::Bicol));
        assert_eq!(value, MetricValue::Value(6_000_000.0));
    }

    #[test]
    fn test_average_density_nationwide_divides_by_region_count_truncating() {
        let csv = "\
Region,Population
Region I,100000000
";
        let ds = YearlyDataset::from_csv(2016, csv).unwrap();
        // 100,000,000 / 17 = 5,882,352.94... truncated to 5,882,352
        assert_eq!(average_density(&ds, None), MetricValue::Value(5_882_352.0));
    }

    #[test]
    fn test_aggregators_are_idempotent() {
        let ds = dataset();
        assert_eq!(
            waste_generated(&ds, Some(Region::Calabarzon)),
            waste_generated(&ds, Some(Region::Calabarzon))
        );
        assert_eq!(average_density(&ds, None), average_density(&ds, None));
    }
}
