use crate::models::{LocationValue, RankingSpec};
use pwm_data::BoundaryCollection;

/// Build the ranked horizontal bar spec for an indexed collection and a
/// selected column.
///
/// Every entry appears exactly once, sorted ascending by the column's
/// value (missing fields rank as 0). The sort is stable, so ties keep
/// their input order; no location is dropped or duplicated.
pub fn ranking(collection: &BoundaryCollection, column: &str) -> RankingSpec {
    let mut bars: Vec<LocationValue> = collection
        .entries()
        .iter()
        .map(|entry| LocationValue {
            location: entry.name().to_string(),
            value: entry.field(column),
        })
        .collect();
    bars.sort_by(|a, b| a.value.total_cmp(&b.value));
    RankingSpec {
        column: column.to_string(),
        bars,
    }
}
