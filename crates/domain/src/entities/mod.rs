//! Domain entities - Geocoding results

mod address;
mod address_collection;

pub use address::{Address, AddressBuilder};
pub use address_collection::AddressCollection;
