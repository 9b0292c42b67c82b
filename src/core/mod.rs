//! Core-Domänentypen: Kategorien, Marker, Geo-Rahmen.

pub mod category;
pub mod geo;
pub mod marker;

pub use category::Category;
pub use geo::GeoBounds;
pub use marker::{Marker, MarkerStore, ScheduleField, TimeRange};
