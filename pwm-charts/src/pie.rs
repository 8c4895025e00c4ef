use crate::metrics::sum_columns;
use crate::models::{PieSlice, PieSpec};
use pwm_core::columns::{waste_category_color, WASTE_CATEGORY_COLUMNS};
use pwm_core::dataset::YearlyDataset;
use pwm_core::region::Region;

/// Build the categorical waste breakdown for one dataset and region
/// filter.
///
/// Emits one slice per fixed category column, in the fixed order, with
/// the deterministic category color; a category with no data keeps its
/// slice with value 0. The slice values therefore always sum to the
/// direct sum of the category columns.
pub fn waste_breakdown(dataset: &YearlyDataset, region: Option<Region>) -> PieSpec {
    let slices = WASTE_CATEGORY_COLUMNS
        .iter()
        .map(|&category| PieSlice {
            category: category.to_string(),
            value: sum_columns(dataset, region, &[category]),
            color: waste_category_color(category).to_string(),
        })
        .collect();
    PieSpec {
        year: dataset.year(),
        region: region.map(|r| r.name().to_string()),
        slices,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const FIXTURE: &str = "\
Region,Acid Wastes,Alkali Wastes,Waste Organic Solvents,Used Industrial Oil,Containers,Busted Lamps,Miscellaneous Wastes
Region I,10,5,N/A,20,0,3,2
Region V,1,2,3,4,5,6,7
Philippines,11,7,3,24,5,9,9
";

    fn dataset() -> YearlyDataset {
        YearlyDataset::from_csv(2017, FIXTURE).unwrap()
    }

    #[test]
    fn test_every_category_appears_exactly_once_in_fixed_order() {
        let spec = waste_breakdown(&dataset(), None);
        let categories: Vec<&str> = spec.slices.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, WASTE_CATEGORY_COLUMNS.to_vec());
    }

    #[test]
    fn test_slice_sum_equals_direct_column_sum() {
        let ds = dataset();
        let spec = waste_breakdown(&ds, Some(Region::Ilocos));
        let slice_total: f64 = spec.slices.iter().map(|s| s.value).sum();
        let direct: f64 = WASTE_CATEGORY_COLUMNS
            .iter()
            .map(|&col| sum_columns(&ds, Some(Region::Ilocos), &[col]))
            .sum();
        assert_eq!(slice_total, direct);
        assert_eq!(slice_total, 40.0); // "N/A" coerces to 0
    }

    #[test]
    fn test_zero_valued_category_keeps_its_slice() {
        let spec = waste_breakdown(&dataset(), Some(Region::Ilocos));
        let solvents = spec
            .slices
            .iter()
            .find(|s| s.category == "Waste Organic Solvents")
            .unwrap();
        assert_eq!(solvents.value, 0.0);
    }

    #[test]
    fn test_colors_are_deterministic() {
        let ds = dataset();
        let a = waste_breakdown(&ds, None);
        let b = waste_breakdown(&ds, None);
        assert_eq!(a, b);
        assert!(a.slices.iter().all(|s| s.color.starts_with('#')));
    }

    #[test]
    fn test_region_label_carried_on_spec() {
        assert_eq!(waste_breakdown(&dataset(), None).region, None);
        assert_eq!(
            waste_breakdown(&dataset(), Some(Region::Bicol)).region.as_deref(),
            Some("Region V")
        );
    }
}
