use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of first-level administrative regions in the Philippines.
///
/// Used as the divisor for the mean-of-regions population density
/// approximation.
pub const REGION_COUNT: u32 = 17;

/// Row label used by the source tables for the precomputed nationwide
/// total. That row must be excluded from per-region summation to avoid
/// double counting.
pub const AGGREGATE_ROW_NAME: &str = "Philippines";

/// One of the 17 first-level administrative regions of the Philippines.
///
/// The set is fixed and consistent across all years of the waste tables.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Region {
    Ncr,
    Car,
    Ilocos,
    CagayanValley,
    CentralLuzon,
    Calabarzon,
    Mimaropa,
    Bicol,
    WesternVisayas,
    CentralVisayas,
    EasternVisayas,
    ZamboangaPeninsula,
    NorthernMindanao,
    Davao,
    Soccsksargen,
    Caraga,
    Barmm,
}

impl Region {
    /// All regions, in the order used by the source tables.
    pub const ALL: [Region; REGION_COUNT as usize] = [
        Region::Ncr,
        Region::Car,
        Region::Ilocos,
        Region::CagayanValley,
        Region::CentralLuzon,
        Region::Calabarzon,
        Region::Mimaropa,
        Region::Bicol,
        Region::WesternVisayas,
        Region::CentralVisayas,
        Region::EasternVisayas,
        Region::ZamboangaPeninsula,
        Region::NorthernMindanao,
        Region::Davao,
        Region::Soccsksargen,
        Region::Caraga,
        Region::Barmm,
    ];

    /// Canonical name as written in the waste tables.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Ncr => "NCR",
            Region::Car => "CAR",
            Region::Ilocos => "Region I",
            Region::CagayanValley => "Region II",
            Region::CentralLuzon => "Region III",
            Region::Calabarzon => "Region IV-A",
            Region::Mimaropa => "Region IV-B",
            Region::Bicol => "Region V",
            Region::WesternVisayas => "Region VI",
            Region::CentralVisayas => "Region VII",
            Region::EasternVisayas => "Region VIII",
            Region::ZamboangaPeninsula => "Region IX",
            Region::NorthernMindanao => "Region X",
            Region::Davao => "Region XI",
            Region::Soccsksargen => "Region XII",
            Region::Caraga => "Region XIII",
            Region::Barmm => "BARMM",
        }
    }

    /// Descriptive name, as used on boundary files and hover labels.
    pub fn descriptive_name(&self) -> &'static str {
        match self {
            Region::Ncr => "National Capital Region",
            Region::Car => "Cordillera Administrative Region",
            Region::Ilocos => "Ilocos Region",
            Region::CagayanValley => "Cagayan Valley",
            Region::CentralLuzon => "Central Luzon",
            Region::Calabarzon => "CALABARZON",
            Region::Mimaropa => "MIMAROPA",
            Region::Bicol => "Bicol Region",
            Region::WesternVisayas => "Western Visayas",
            Region::CentralVisayas => "Central Visayas",
            Region::EasternVisayas => "Eastern Visayas",
            Region::ZamboangaPeninsula => "Zamboanga Peninsula",
            Region::NorthernMindanao => "Northern Mindanao",
            Region::Davao => "Davao Region",
            Region::Soccsksargen => "SOCCSKSARGEN",
            Region::Caraga => "Caraga",
            Region::Barmm => "BARMM",
        }
    }

    /// Parse a region name as it appears in source data.
    ///
    /// Matching is case-insensitive and accepts both the canonical short
    /// name ("Region IV-A") and the descriptive name ("CALABARZON"), plus
    /// combined forms like "Region IV-A (CALABARZON)". Returns `None` for
    /// unknown names and for the nationwide aggregate row.
    pub fn from_name(raw: &str) -> Option<Region> {
        let trimmed = raw.trim();
        // "Region IV-A (CALABARZON)" -> "Region IV-A"
        let short = match trimmed.split_once(" (") {
            Some((head, _)) => head.trim(),
            None => trimmed,
        };
        Region::ALL.iter().copied().find(|region| {
            short.eq_ignore_ascii_case(region.name())
                || trimmed.eq_ignore_ascii_case(region.descriptive_name())
        })
    }

}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a raw region name is the nationwide aggregate sentinel row.
pub fn is_aggregate_name(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(AGGREGATE_ROW_NAME)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_all_regions_have_distinct_names() {
        for (i, a) in Region::ALL.iter().enumerate() {
            for b in Region::ALL.iter().skip(i + 1) {
                assert_ne!(a.name(), b.name());
            }
        }
        assert_eq!(Region::ALL.len(), REGION_COUNT as usize);
    }

    #[test]
    fn test_from_name_accepts_variants() {
        assert_eq!(Region::from_name("Region IV-A"), Some(Region::Calabarzon));
        assert_eq!(Region::from_name("region iv-a"), Some(Region::Calabarzon));
        assert_eq!(Region::from_name("CALABARZON"), Some(Region::Calabarzon));
        assert_eq!(
            Region::from_name("Region IV-A (CALABARZON)"),
            Some(Region::Calabarzon)
        );
        assert_eq!(
            Region::from_name("National Capital Region"),
            Some(Region::Ncr)
        );
    }

    #[test]
    fn test_from_name_rejects_aggregate_row() {
        assert_eq!(Region::from_name("Philippines"), None);
        assert!(is_aggregate_name(" PHILIPPINES "));
        assert!(!is_aggregate_name("Region I"));
    }
}
