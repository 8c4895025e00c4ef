use crate::education::EducationAggregate;
use crate::error::DataUnavailable;
use crate::geo::{BoundaryCollection, REGION_NAME_PROPERTY};
use anyhow::anyhow;
use pwm_core::dataset::{year_in_range, year_range, YearlyDataset};
use pwm_core::selection::ClassificationMode;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// All loaded datasets, keyed explicitly by year and mode.
///
/// Built once at process start and shared read-only afterwards; every
/// aggregator and builder receives it by reference. Lookups go through
/// the keyed maps, never through name-based dispatch, so an out-of-range
/// request is an ordinary, testable [`DataUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    datasets: BTreeMap<i32, YearlyDataset>,
    boundaries: BTreeMap<i32, BoundaryCollection>,
    education: HashMap<ClassificationMode, EducationAggregate>,
    national: Option<BoundaryCollection>,
}

impl DatasetStore {
    pub fn new() -> Self {
        DatasetStore::default()
    }

    /// Load every dataset from a data directory.
    ///
    /// Expected layout:
    /// - `waste/<year>.csv` for each year 2015-2022
    /// - `boundaries/<year>.geojson` for each year
    /// - `educ_by_amenity.geojson`, `educ_by_operator.geojson`
    ///
    /// A missing or malformed file is logged and recorded as absent; the
    /// corresponding accessor then reports [`DataUnavailable`] instead of
    /// failing startup. A directory with no usable waste table at all is
    /// a hard startup error.
    pub fn load(dir: &Path) -> anyhow::Result<DatasetStore> {
        let mut store = DatasetStore::new();

        for year in year_range() {
            let waste_path = dir.join("waste").join(format!("{year}.csv"));
            match fs::read_to_string(&waste_path) {
                Ok(text) => match YearlyDataset::from_csv(year, &text) {
                    Ok(dataset) => store.insert_dataset(dataset),
                    Err(err) => {
                        log::warn!("skipping malformed waste table {:?}: {:#}", waste_path, err)
                    }
                },
                Err(err) => log::warn!("skipping waste table {:?}: {}", waste_path, err),
            }

            let bounds_path = dir.join("boundaries").join(format!("{year}.geojson"));
            match fs::read_to_string(&bounds_path) {
                Ok(text) => match BoundaryCollection::from_geojson(&text, REGION_NAME_PROPERTY) {
                    Ok(bounds) => store.insert_boundaries(year, bounds),
                    Err(err) => {
                        log::warn!("skipping malformed boundaries {:?}: {:#}", bounds_path, err)
                    }
                },
                Err(err) => log::warn!("skipping boundaries {:?}: {}", bounds_path, err),
            }
        }

        let national_path = dir.join("ph_regions.geojson");
        match fs::read_to_string(&national_path) {
            Ok(text) => match BoundaryCollection::from_geojson(&text, REGION_NAME_PROPERTY) {
                Ok(bounds) => store.insert_national(bounds),
                Err(err) => log::warn!(
                    "skipping malformed national boundaries {:?}: {:#}",
                    national_path,
                    err
                ),
            },
            Err(err) => log::warn!("skipping national boundaries {:?}: {}", national_path, err),
        }

        for mode in ClassificationMode::ALL {
            let path = dir.join(format!("educ_by_{}.geojson", mode.as_str()));
            match fs::read_to_string(&path) {
                Ok(text) => match EducationAggregate::from_geojson(mode, &text) {
                    Ok(aggregate) => store.insert_education(aggregate),
                    Err(err) => log::warn!(
                        "skipping malformed education aggregate {:?}: {:#}",
                        path,
                        err
                    ),
                },
                Err(err) => log::warn!("skipping education aggregate {:?}: {}", path, err),
            }
        }

        if store.datasets.is_empty() {
            return Err(anyhow!(
                "no usable waste table found under {:?}",
                dir.join("waste")
            ));
        }
        log::info!(
            "dataset store: {} waste tables, {} boundary sets, {} education aggregates",
            store.datasets.len(),
            store.boundaries.len(),
            store.education.len()
        );
        Ok(store)
    }

    pub fn insert_dataset(&mut self, dataset: YearlyDataset) {
        self.datasets.insert(dataset.year(), dataset);
    }

    pub fn insert_boundaries(&mut self, year: i32, bounds: BoundaryCollection) {
        self.boundaries.insert(year, bounds);
    }

    pub fn insert_education(&mut self, aggregate: EducationAggregate) {
        self.education.insert(aggregate.mode(), aggregate);
    }

    pub fn insert_national(&mut self, bounds: BoundaryCollection) {
        self.national = Some(bounds);
    }

    /// The waste table for a year.
    pub fn dataset(&self, year: i32) -> Result<&YearlyDataset, DataUnavailable> {
        if !year_in_range(year) {
            return Err(DataUnavailable::YearOutOfRange(year));
        }
        self.datasets
            .get(&year)
            .ok_or(DataUnavailable::MissingYear(year))
    }

    /// The region boundaries for a year.
    pub fn boundaries(&self, year: i32) -> Result<&BoundaryCollection, DataUnavailable> {
        if !year_in_range(year) {
            return Err(DataUnavailable::YearOutOfRange(year));
        }
        self.boundaries
            .get(&year)
            .ok_or(DataUnavailable::MissingBoundaries(year))
    }

    /// The education aggregate for a classification mode.
    pub fn education(&self, mode: ClassificationMode) -> Result<&EducationAggregate, DataUnavailable> {
        self.education
            .get(&mode)
            .ok_or(DataUnavailable::MissingEducation(mode))
    }

    /// The year-independent national administrative-boundary geometry.
    pub fn national_boundaries(&self) -> Result<&BoundaryCollection, DataUnavailable> {
        self.national
            .as_ref()
            .ok_or(DataUnavailable::MissingNationalBoundaries)
    }

    /// Distinct region names observed across all loaded years, in first-
    /// seen order. Feeds the region selector control.
    pub fn region_names(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for dataset in self.datasets.values() {
            for name in dataset.region_names() {
                if !seen.contains(&name) {
                    seen.push(name);
                }
            }
        }
        seen
    }
}
