//! Ordered collection of geocoding results

use serde::{Deserialize, Serialize};

use super::address::Address;

/// Ordered, countable sequence of [`Address`] values
///
/// An empty collection is a valid result and means "no match".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressCollection {
    addresses: Vec<Address>,
}

impl AddressCollection {
    #[must_use]
    pub const fn new(addresses: Vec<Address>) -> Self {
        Self { addresses }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Address> {
        self.addresses.first()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Address> {
        self.addresses.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.addresses.iter()
    }
}

impl From<Vec<Address>> for AddressCollection {
    fn from(addresses: Vec<Address>) -> Self {
        Self::new(addresses)
    }
}

impl IntoIterator for AddressCollection {
    type Item = Address;
    type IntoIter = std::vec::IntoIter<Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressCollection {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}
