//! Fixed column sets used by the metrics and chart builders.
//!
//! The source tables carry one column per waste category and facility
//! type; these constants name the subsets each metric sums over. Keys
//! must match the table headers exactly.

/// Columns summed for the "Waste Generated" metric.
pub const TOTAL_WASTE_COLUMNS: [&str; 1] = ["Total Hazardous Wastes"];

/// Facility-type count columns summed for the "Waste Disposal
/// Facilities" metric.
pub const FACILITY_COLUMNS: [&str; 3] = [
    "Materials Recovery Facility",
    "Sanitary Landfill",
    "Registered TSD Facilities",
];

/// Population column, used by the average-density metric.
pub const POPULATION_COLUMN: &str = "Population";

/// Per-category hazardous waste columns, in the fixed order the pie
/// breakdown emits them.
pub const WASTE_CATEGORY_COLUMNS: [&str; 7] = [
    "Acid Wastes",
    "Alkali Wastes",
    "Waste Organic Solvents",
    "Used Industrial Oil",
    "Containers",
    "Busted Lamps",
    "Miscellaneous Wastes",
];

/// Default choropleth display column.
pub const DEFAULT_MAP_COLUMN: &str = "Hazardous Waste Per Capita";

/// Fallback slice color for categories outside [`WASTE_CATEGORY_COLORS`].
pub const FALLBACK_CATEGORY_COLOR: &str = "#bdbdbd";

/// Deterministic category -> color table for the pie breakdown.
pub const WASTE_CATEGORY_COLORS: [(&str, &str); 7] = [
    ("Acid Wastes", "#d73027"),
    ("Alkali Wastes", "#fc8d59"),
    ("Waste Organic Solvents", "#fee090"),
    ("Used Industrial Oil", "#74add1"),
    ("Containers", "#4575b4"),
    ("Busted Lamps", "#984ea3"),
    ("Miscellaneous Wastes", "#4daf4a"),
];

/// Color for a waste category, falling back for unlisted categories.
pub fn waste_category_color(category: &str) -> &'static str {
    WASTE_CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_CATEGORY_COLOR)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_every_category_has_a_color() {
        for category in WASTE_CATEGORY_COLUMNS {
            assert_ne!(waste_category_color(category), FALLBACK_CATEGORY_COLOR);
        }
    }

    #[test]
    fn test_unlisted_category_gets_fallback() {
        assert_eq!(
            waste_category_color("Radioactive Slime"),
            FALLBACK_CATEGORY_COLOR
        );
    }
}
