//! Dataset store for the Philippine waste management dashboard.
//!
//! Loads per-year waste tables (CSV), per-year region boundaries
//! (GeoJSON), and the two education-facility aggregates at startup, and
//! exposes them read-only behind explicit year/mode-keyed lookups. A
//! year or mode with no usable data reports [`error::DataUnavailable`]
//! instead of panicking, so the display layer can render "No Data".

pub mod education;
pub mod error;
pub mod geo;
pub mod store;

pub use education::EducationAggregate;
pub use error::DataUnavailable;
pub use geo::{Boundary, BoundaryCollection};
pub use store::DatasetStore;
