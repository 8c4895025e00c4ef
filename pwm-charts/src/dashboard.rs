use crate::choropleth::choropleth;
use crate::format::{metric_text, NO_DATA_TEXT};
use crate::metrics::{average_density, facility_count, waste_generated};
use crate::models::{ChoroplethSpec, PieSpec, RankingSpec, TrendSeries};
use crate::pie::waste_breakdown;
use crate::ranking::ranking;
use crate::trend::trend;
use pwm_core::columns::TOTAL_WASTE_COLUMNS;
use pwm_core::selection::Selection;
use pwm_data::DatasetStore;
use serde::Serialize;

/// Everything one render cycle displays, recomputed as a pure function
/// of the immutable store and the current selection.
///
/// This is the input -> aggregate -> output contract of the dashboard
/// callbacks in one place: three formatted metric cards, the map, the
/// ranking bars, the multi-year trend, the waste breakdown, and the
/// education category options for the current classification mode. Any
/// unavailable slice degrades to "No Data" / an absent spec instead of
/// failing the whole view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub waste_generated: String,
    pub disposal_facilities: String,
    pub average_population_density: String,
    pub choropleth: Option<ChoroplethSpec>,
    pub ranking: Option<RankingSpec>,
    pub trend: Vec<TrendSeries>,
    pub waste_breakdown: Option<PieSpec>,
    pub category_options: Vec<String>,
    pub selected_category: Option<String>,
}

impl DashboardView {
    pub fn compute(store: &DatasetStore, selection: &Selection) -> DashboardView {
        let (waste, facilities, density, breakdown) = match store.dataset(selection.year) {
            Ok(dataset) => (
                metric_text(waste_generated(dataset, selection.region), "tons"),
                metric_text(facility_count(dataset, selection.region), ""),
                metric_text(average_density(dataset, selection.region), ""),
                Some(waste_breakdown(dataset, selection.region)),
            ),
            Err(err) => {
                log::warn!("dashboard metrics unavailable: {err}");
                (
                    NO_DATA_TEXT.to_string(),
                    NO_DATA_TEXT.to_string(),
                    NO_DATA_TEXT.to_string(),
                    None,
                )
            }
        };

        let map = store
            .boundaries(selection.year)
            .ok()
            .map(|bounds| choropleth(bounds, &selection.map_column));

        let (category_options, selected_category, bars) = match store.education(selection.mode) {
            Ok(aggregate) => {
                let (options, default) = aggregate.options();
                let selected = selection
                    .education_column
                    .clone()
                    .filter(|col| options.contains(col))
                    .or(default);
                let bars = selected
                    .as_deref()
                    .map(|column| ranking(aggregate.provinces(), column));
                (options, selected, bars)
            }
            Err(err) => {
                log::warn!("education ranking unavailable: {err}");
                (Vec::new(), None, None)
            }
        };

        let metric_columns: Vec<&str> = TOTAL_WASTE_COLUMNS.to_vec();

        DashboardView {
            waste_generated: waste,
            disposal_facilities: facilities,
            average_population_density: density,
            choropleth: map,
            ranking: bars,
            trend: trend(store, selection.region, &metric_columns),
            waste_breakdown: breakdown,
            category_options,
            selected_category,
        }
    }
}

/// The option sets offered by the interactive controls.
///
/// Populated once from the loaded data: the year slider domain, the
/// region selector (distinct names observed in the tables, falling back
/// to the national boundary file when no table loaded), the styled map
/// columns, and the education categories per classification mode.
#[derive(Debug, Clone, Serialize)]
pub struct ControlOptions {
    pub years: Vec<i32>,
    pub regions: Vec<String>,
    pub map_columns: Vec<String>,
    pub amenity_categories: Vec<String>,
    pub operator_categories: Vec<String>,
}

impl ControlOptions {
    pub fn gather(store: &DatasetStore) -> ControlOptions {
        let mut regions = store.region_names();
        if regions.is_empty() {
            if let Ok(national) = store.national_boundaries() {
                regions = national
                    .entries()
                    .iter()
                    .map(|b| b.name().to_string())
                    .collect();
            }
        }
        let categories = |mode| match store.education(mode) {
            Ok(aggregate) => aggregate.columns().to_vec(),
            Err(_) => Vec::new(),
        };
        ControlOptions {
            years: pwm_core::dataset::year_range().collect(),
            regions,
            map_columns: crate::choropleth::map_columns()
                .into_iter()
                .map(str::to_string)
                .collect(),
            amenity_categories: categories(pwm_core::selection::ClassificationMode::Amenity),
            operator_categories: categories(pwm_core::selection::ClassificationMode::Operator),
        }
    }
}
