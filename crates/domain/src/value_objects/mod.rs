//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod station_id;
mod temperature_units;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use station_id::StationId;
pub use temperature_units::TemperatureUnits;
