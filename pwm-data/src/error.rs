use pwm_core::dataset::{YEAR_MAX, YEAR_MIN};
use pwm_core::selection::ClassificationMode;
use std::fmt;

/// Requested data that the store cannot serve.
///
/// Always recovered locally by the caller as a "No Data" display state;
/// never a crash.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DataUnavailable {
    /// Year outside the fixed [`YEAR_MIN`]..=[`YEAR_MAX`] range.
    YearOutOfRange(i32),
    /// Year inside range, but its file was missing or unparseable.
    MissingYear(i32),
    /// The boundary file for a year was missing or unparseable.
    MissingBoundaries(i32),
    /// No aggregate loaded for this classification mode.
    MissingEducation(ClassificationMode),
    /// The national administrative-boundary file was not loaded.
    MissingNationalBoundaries,
}

impl fmt::Display for DataUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataUnavailable::YearOutOfRange(year) => write!(
                f,
                "year {year} is outside the covered range {YEAR_MIN}-{YEAR_MAX}"
            ),
            DataUnavailable::MissingYear(year) => {
                write!(f, "no waste table loaded for {year}")
            }
            DataUnavailable::MissingBoundaries(year) => {
                write!(f, "no region boundaries loaded for {year}")
            }
            DataUnavailable::MissingEducation(mode) => {
                write!(f, "no education aggregate loaded for mode '{mode}'")
            }
            DataUnavailable::MissingNationalBoundaries => {
                write!(f, "no national administrative boundaries loaded")
            }
        }
    }
}

impl std::error::Error for DataUnavailable {}
