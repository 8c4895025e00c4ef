use crate::geo::{BoundaryCollection, PROVINCE_NAME_PROPERTY};
use pwm_core::selection::ClassificationMode;
use std::collections::BTreeSet;

/// Per-province education facility counts under one classification
/// scheme (amenity or operator type), indexed by province name.
#[derive(Debug, Clone)]
pub struct EducationAggregate {
    mode: ClassificationMode,
    provinces: BoundaryCollection,
    columns: Vec<String>,
}

impl EducationAggregate {
    /// Parse a mode-keyed education aggregate GeoJSON file.
    ///
    /// Category columns are the sorted union of numeric property names
    /// across all provinces. GeoJSON property order is not stable under
    /// serialization, so a sorted union is the deterministic choice.
    pub fn from_geojson(
        mode: ClassificationMode,
        data: &str,
    ) -> anyhow::Result<EducationAggregate> {
        let provinces = BoundaryCollection::from_geojson(data, PROVINCE_NAME_PROPERTY)?;
        let columns: BTreeSet<String> = provinces
            .entries()
            .iter()
            .flat_map(|p| p.numeric_columns().map(str::to_string))
            .collect();
        log::info!(
            "education aggregate '{}': {} provinces, {} categories",
            mode,
            provinces.len(),
            columns.len()
        );
        Ok(EducationAggregate {
            mode,
            provinces,
            columns: columns.into_iter().collect(),
        })
    }

    pub fn mode(&self) -> ClassificationMode {
        self.mode
    }

    pub fn provinces(&self) -> &BoundaryCollection {
        &self.provinces
    }

    /// Category columns offered by the selector for this mode.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Selector options plus the default selection (the first option),
    /// mirroring how the dropdown is repopulated on mode change.
    pub fn options(&self) -> (Vec<String>, Option<String>) {
        let options = self.columns.clone();
        let default = options.first().cloned();
        (options, default)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const FIXTURE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"province": "Cebu", "college": 42, "kindergarten": 120, "school": 311},
                "geometry": {"type": "Polygon", "coordinates": [[[123.0, 10.0], [124.0, 10.0], [124.0, 11.0], [123.0, 10.0]]]}
            },
            {
                "type": "Feature",
                "properties": {"province": "Bohol", "college": 9, "school": 150, "university": 2},
                "geometry": {"type": "Polygon", "coordinates": [[[123.0, 9.0], [124.0, 9.0], [124.0, 10.0], [123.0, 9.0]]]}
            }
        ]
    }"#;

    #[test]
    fn test_columns_are_sorted_union() {
        let agg =
            EducationAggregate::from_geojson(ClassificationMode::Amenity, FIXTURE).unwrap();
        assert_eq!(
            agg.columns(),
            &["college", "kindergarten", "school", "university"]
        );
    }

    #[test]
    fn test_options_default_is_first() {
        let agg =
            EducationAggregate::from_geojson(ClassificationMode::Operator, FIXTURE).unwrap();
        let (options, default) = agg.options();
        assert_eq!(default.as_deref(), Some("college"));
        assert_eq!(options.len(), 4);
        assert_eq!(agg.mode(), ClassificationMode::Operator);
    }

    #[test]
    fn test_provinces_indexed_by_name() {
        let agg =
            EducationAggregate::from_geojson(ClassificationMode::Amenity, FIXTURE).unwrap();
        let cebu = agg.provinces().get("Cebu").unwrap();
        assert_eq!(cebu.field("college"), 42.0);
        // absent category on a province counts as zero
        assert_eq!(cebu.field("university"), 0.0);
    }
}
