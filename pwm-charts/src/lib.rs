//! Metric aggregators and chart-spec builders.
//!
//! Every function here is a stateless pure map from (dataset snapshot,
//! selection) to a scalar or a `Serialize` chart specification; the
//! rendering frontend consumes the specs as JSON.

pub mod choropleth;
pub mod dashboard;
pub mod format;
pub mod metrics;
pub mod models;
pub mod pie;
pub mod ranking;
pub mod trend;

pub use dashboard::{ControlOptions, DashboardView};
pub use metrics::MetricValue;
