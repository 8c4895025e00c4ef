use crate::metrics::sum_columns;
use crate::models::{TrendSeries, YearValue};
use pwm_core::dataset::year_range;
use pwm_core::region::Region;
use pwm_data::DatasetStore;

/// Build multi-year trend series for the named metric columns.
///
/// One series per metric, each with exactly one point per configured
/// year in ascending order. No gap-filling: a year with no matching
/// rows (or no loaded table) contributes the value 0, never an omitted
/// point, so every series has the full fixed length.
pub fn trend(store: &DatasetStore, region: Option<Region>, metrics: &[&str]) -> Vec<TrendSeries> {
    metrics
        .iter()
        .map(|&metric| TrendSeries {
            metric: metric.to_string(),
            points: year_range()
                .map(|year| YearValue {
                    year,
                    value: match store.dataset(year) {
                        Ok(dataset) => sum_columns(dataset, region, &[metric]),
                        Err(_) => 0.0,
                    },
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use pwm_core::dataset::YearlyDataset;

    fn store() -> DatasetStore {
        let mut store = DatasetStore::new();
        store.insert_dataset(
            YearlyDataset::from_csv(
                2015,
                "Region,Total Hazardous Wastes\nRegion I,100\nRegion V,40\nPhilippines,140\n",
            )
            .unwrap(),
        );
        store.insert_dataset(
            YearlyDataset::from_csv(2018, "Region,Total Hazardous Wastes\nRegion I,70\n").unwrap(),
        );
        store
    }

    #[test]
    fn test_trend_emits_one_point_per_configured_year() {
        let series = trend(&store(), None, &["Total Hazardous Wastes"]);
        assert_eq!(series.len(), 1);
        let points = &series[0].points;
        assert_eq!(points.len(), 8);
        let years: Vec<i32> = points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2015, 2016, 2017, 2018, 2019, 2020, 2021, 2022]);
    }

    #[test]
    fn test_missing_years_yield_zero_not_omission() {
        let series = trend(&store(), None, &["Total Hazardous Wastes"]);
        let points = &series[0].points;
        assert_eq!(points[0].value, 140.0); // 2015, aggregate row excluded
        assert_eq!(points[1].value, 0.0); // 2016 has no table
        assert_eq!(points[3].value, 70.0); // 2018
    }

    #[test]
    fn test_trend_respects_region_filter() {
        let series = trend(&store(), Some(Region::Bicol), &["Total Hazardous Wastes"]);
        assert_eq!(series[0].points[0].value, 40.0);
        assert_eq!(series[0].points[3].value, 0.0); // Region V absent in 2018
    }

    #[test]
    fn test_trend_supports_multiple_metrics() {
        let series = trend(&store(), None, &["Total Hazardous Wastes", "Population"]);
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|s| s.points.len() == 8));
    }

    #[test]
    fn test_trend_is_idempotent() {
        let s = store();
        assert_eq!(
            trend(&s, None, &["Total Hazardous Wastes"]),
            trend(&s, None, &["Total Hazardous Wastes"])
        );
    }
}
