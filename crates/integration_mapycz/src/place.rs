//! Mapy.cz place categories
//!
//! Forward results carry the category in a `source` attribute, reverse
//! facets in a `type` attribute. Both use the same four-letter codes.

use std::fmt;

/// Known place categories; unknown codes are ignored by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceKind {
    /// `addr` - a building with a street number
    Address,
    /// `stre` - a street
    Street,
    /// `quar` - city quarter
    Quarter,
    /// `ward` - part of a municipality
    Ward,
    /// `muni` - municipality
    Municipality,
    /// `dist` - district
    District,
    /// `regi` - region
    Region,
    /// `coun` - country
    Country,
}

impl PlaceKind {
    /// Map a Mapy.cz category code to a kind
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "addr" => Some(Self::Address),
            "stre" => Some(Self::Street),
            "quar" => Some(Self::Quarter),
            "ward" => Some(Self::Ward),
            "muni" => Some(Self::Municipality),
            "dist" => Some(Self::District),
            "regi" => Some(Self::Region),
            "coun" => Some(Self::Country),
            _ => None,
        }
    }

    /// The Mapy.cz category code
    pub const fn code(self) -> &'static str {
        match self {
            Self::Address => "addr",
            Self::Street => "stre",
            Self::Quarter => "quar",
            Self::Ward => "ward",
            Self::Municipality => "muni",
            Self::District => "dist",
            Self::Region => "regi",
            Self::Country => "coun",
        }
    }

    /// Whether forward geocoding returns results of this kind
    pub const fn is_geocodable(self) -> bool {
        matches!(self, Self::Address | Self::Street)
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
