//! Chart specification structs.
//!
//! All structs derive `Serialize` so the specs can be handed to the
//! rendering frontend as JSON.

use geojson::Geometry;
use serde::Serialize;

/// A single (year, value) pair of a trend series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// One metric's values across all configured years, for a line or
/// stacked-area rendering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendSeries {
    pub metric: String,
    pub points: Vec<YearValue>,
}

/// A (location, value) pair for ranking bars.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationValue {
    pub location: String,
    pub value: f64,
}

/// Horizontal ranking bar chart: entries sorted ascending by value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingSpec {
    pub column: String,
    pub bars: Vec<LocationValue>,
}

/// One slice of the categorical waste breakdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub value: f64,
    pub color: String,
}

/// Categorical waste breakdown for one (year, region filter).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSpec {
    pub year: i32,
    /// `None` for the nationwide breakdown.
    pub region: Option<String>,
    pub slices: Vec<PieSlice>,
}

/// One shaded location of a choropleth map.
#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethLocation {
    pub name: String,
    pub value: f64,
    pub geometry: Geometry,
    /// Values aligned with the spec's `hover_fields`.
    pub hover_values: Vec<f64>,
}

/// Choropleth map specification for one year and display column.
#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethSpec {
    pub column: String,
    pub color_scale: crate::choropleth::ColorScale,
    pub hover_fields: Vec<String>,
    pub locations: Vec<ChoroplethLocation>,
}
