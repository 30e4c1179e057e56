//! Domain layer for the Mapy.cz geocoder
//!
//! Contains the address model produced by geocoding providers, the query
//! value objects they consume, and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod queries;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use queries::{DEFAULT_RESULT_LIMIT, GeocodeQuery, ReverseQuery};
pub use value_objects::*;
