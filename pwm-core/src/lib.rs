pub mod columns;
pub mod dataset;
pub mod field_value;
pub mod record;
pub mod region;
pub mod selection;
