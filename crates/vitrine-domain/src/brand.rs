//! The enumerated brand set
//!
//! Brands are the sole join key across the source tables. Source data is
//! inconsistent about casing and surrounding whitespace, so all matching
//! goes through [`Brand::matches`] rather than raw string equality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A luxury brand tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Brand {
    Hermes,
    Gucci,
    Coach,
}

impl Brand {
    /// Every brand, in display order
    pub const ALL: [Brand; 3] = [Brand::Hermes, Brand::Gucci, Brand::Coach];

    /// Canonical brand name as it appears in well-formed source data
    pub fn name(&self) -> &'static str {
        match self {
            Brand::Hermes => "Hermes",
            Brand::Gucci => "Gucci",
            Brand::Coach => "Coach",
        }
    }

    /// Case-insensitive match against a raw cell value
    ///
    /// Surrounding whitespace is ignored; `" hermes "` matches
    /// [`Brand::Hermes`].
    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().eq_ignore_ascii_case(self.name())
    }

    /// Resolve a raw cell value to a brand, if it names one
    pub fn from_raw(raw: &str) -> Option<Brand> {
        Brand::ALL.into_iter().find(|b| b.matches(raw))
    }

    /// Column name carrying this brand's revenue in the revenue table
    pub fn revenue_column(&self) -> String {
        format!("{}_Revenue_Million_USD", self.name())
    }

    /// Substring used to locate this brand's column in the
    /// search-interest export
    ///
    /// The export spells brand names inconsistently ("Hermès",
    /// "Hermes: (France)"), so the shortest unambiguous stem is used.
    pub fn search_keyword(&self) -> &'static str {
        match self {
            Brand::Hermes => "herm",
            Brand::Gucci => "gucci",
            Brand::Coach => "coach",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known brand
#[derive(Debug, Clone, Error)]
#[error("unknown brand: {0}")]
pub struct UnknownBrand(pub String);

impl FromStr for Brand {
    type Err = UnknownBrand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::from_raw(s).ok_or_else(|| UnknownBrand(s.to_string()))
    }
}
