use crate::columns::DEFAULT_MAP_COLUMN;
use crate::dataset::YEAR_MIN;
use crate::region::Region;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which education-facility classification scheme is displayed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ClassificationMode {
    Amenity,
    Operator,
}

impl ClassificationMode {
    pub const ALL: [ClassificationMode; 2] =
        [ClassificationMode::Amenity, ClassificationMode::Operator];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationMode::Amenity => "amenity",
            ClassificationMode::Operator => "operator",
        }
    }

}

impl std::str::FromStr for ClassificationMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<ClassificationMode, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "amenity" => Ok(ClassificationMode::Amenity),
            "operator" => Ok(ClassificationMode::Operator),
            other => Err(format!("unknown classification mode {other:?}")),
        }
    }
}

impl fmt::Display for ClassificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current user selection driving a render cycle.
///
/// Ephemeral: owned by the UI layer and passed by reference into every
/// aggregator and builder call. `region: None` means nationwide.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub year: i32,
    pub region: Option<Region>,
    /// Choropleth display column; must be one of the styled map columns.
    pub map_column: String,
    /// Education category column for the ranking view; `None` selects
    /// the first category offered by the loaded aggregate.
    pub education_column: Option<String>,
    pub mode: ClassificationMode,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            year: YEAR_MIN,
            region: None,
            map_column: DEFAULT_MAP_COLUMN.to_string(),
            education_column: None,
            mode: ClassificationMode::Amenity,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in ClassificationMode::ALL {
            assert_eq!(mode.as_str().parse(), Ok(mode));
        }
        assert_eq!("OPERATOR".parse(), Ok(ClassificationMode::Operator));
        assert!("ownership".parse::<ClassificationMode>().is_err());
    }

    #[test]
    fn test_default_selection_is_nationwide_first_year() {
        let sel = Selection::default();
        assert_eq!(sel.year, 2015);
        assert_eq!(sel.region, None);
        assert_eq!(sel.mode, ClassificationMode::Amenity);
    }
}
