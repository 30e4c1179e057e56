//! Value Objects - Immutable, identity-less domain primitives

mod admin_level;
mod geo_location;

pub use admin_level::{AdminLevel, AdminLevels, MAX_ADMIN_LEVEL};
pub use geo_location::GeoLocation;
