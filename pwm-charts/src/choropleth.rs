use crate::models::{ChoroplethLocation, ChoroplethSpec};
use pwm_data::BoundaryCollection;
use serde::Serialize;

/// Sequential color scale applied to a choropleth column.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScale {
    Blues,
    Greens,
    Reds,
    Purples,
}

struct ColumnStyle {
    column: &'static str,
    scale: ColorScale,
    hover_fields: &'static [&'static str],
}

/// Fixed display-column -> (color scale, hover fields) table.
///
/// The map column selector offers exactly these keys; a key outside the
/// table is a configuration inconsistency, not a data error.
const COLUMN_STYLES: &[ColumnStyle] = &[
    ColumnStyle {
        column: "Hazardous Waste Per Capita",
        scale: ColorScale::Blues,
        hover_fields: &["Total Hazardous Wastes", "Population"],
    },
    ColumnStyle {
        column: "Total Disposal Facilities",
        scale: ColorScale::Greens,
        hover_fields: &[
            "Materials Recovery Facility",
            "Sanitary Landfill",
            "Registered TSD Facilities",
        ],
    },
    ColumnStyle {
        column: "Illegal Dumpsites",
        scale: ColorScale::Reds,
        hover_fields: &["Illegal Dumpsites", "Population"],
    },
    ColumnStyle {
        column: "Population",
        scale: ColorScale::Purples,
        hover_fields: &["Population"],
    },
];

/// The display columns the map selector may offer, in table order.
pub fn map_columns() -> Vec<&'static str> {
    COLUMN_STYLES.iter().map(|style| style.column).collect()
}

/// Style for a display column.
///
/// Panics on a column outside the fixed table: the selector options and
/// this table must agree, and a mismatch is a programming error to
/// catch in tests, not a runtime data condition.
fn column_style(column: &str) -> &'static ColumnStyle {
    COLUMN_STYLES
        .iter()
        .find(|style| style.column == column)
        .unwrap_or_else(|| panic!("choropleth column {column:?} has no style table entry"))
}

/// Build the choropleth spec for one year's boundaries and a display
/// column.
///
/// Every boundary in the collection appears once, with its value for
/// the column (0 for missing fields) and hover values aligned with the
/// column's hover-field set.
pub fn choropleth(bounds: &BoundaryCollection, column: &str) -> ChoroplethSpec {
    let style = column_style(column);
    let locations = bounds
        .entries()
        .iter()
        .map(|boundary| ChoroplethLocation {
            name: boundary.name().to_string(),
            value: boundary.field(column),
            geometry: boundary.geometry().clone(),
            hover_values: style
                .hover_fields
                .iter()
                .map(|field| boundary.field(field))
                .collect(),
        })
        .collect();
    ChoroplethSpec {
        column: column.to_string(),
        color_scale: style.scale,
        hover_fields: style.hover_fields.iter().map(|s| s.to_string()).collect(),
        locations,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pwm_core::columns::DEFAULT_MAP_COLUMN;
    use pwm_data::geo::REGION_NAME_PROPERTY;

    const FIXTURE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "region": "Region I",
                    "Hazardous Waste Per Capita": 0.4,
                    "Total Hazardous Wastes": 120,
                    "Population": 5000000
                },
                "geometry": {"type": "Polygon", "coordinates": [[[120.0, 16.0], [121.0, 16.0], [121.0, 17.0], [120.0, 16.0]]]}
            },
            {
                "type": "Feature",
                "properties": {
                    "region": "Region II",
                    "Hazardous Waste Per Capita": 0.1
                },
                "geometry": {"type": "Polygon", "coordinates": [[[121.0, 16.0], [122.0, 16.0], [122.0, 17.0], [121.0, 16.0]]]}
            }
        ]
    }"#;

    fn bounds() -> BoundaryCollection {
        BoundaryCollection::from_geojson(FIXTURE, REGION_NAME_PROPERTY).unwrap()
    }

    #[test]
    fn test_choropleth_selects_scale_and_hover_fields_from_table() {
        let spec = choropleth(&bounds(), "Hazardous Waste Per Capita");
        assert_eq!(spec.color_scale, ColorScale::Blues);
        assert_eq!(spec.hover_fields, vec!["Total Hazardous Wastes", "Population"]);
        assert_eq!(spec.locations.len(), 2);
        assert_eq!(spec.locations[0].value, 0.4);
        assert_eq!(spec.locations[0].hover_values, vec![120.0, 5_000_000.0]);
        // Region II lacks the hover fields: zeros, not omission
        assert_eq!(spec.locations[1].hover_values, vec![0.0, 0.0]);
    }

    #[test]
    fn test_facilities_column_uses_green_scale() {
        let spec = choropleth(&bounds(), "Total Disposal Facilities");
        assert_eq!(spec.color_scale, ColorScale::Greens);
        assert_eq!(spec.hover_fields.len(), 3);
    }

    #[test]
    #[should_panic(expected = "no style table entry")]
    fn test_unknown_column_is_a_configuration_error() {
        choropleth(&bounds(), "Average Rainfall");
    }

    #[test]
    fn test_default_map_column_is_in_the_table() {
        assert!(map_columns().contains(&DEFAULT_MAP_COLUMN));
    }

    #[test]
    fn test_choropleth_is_idempotent() {
        let b = bounds();
        let a = choropleth(&b, DEFAULT_MAP_COLUMN);
        let again = choropleth(&b, DEFAULT_MAP_COLUMN);
        assert_eq!(a.hover_fields, again.hover_fields);
        assert_eq!(a.locations.len(), again.locations.len());
        assert_eq!(a.locations[0].value, again.locations[0].value);
    }
}
