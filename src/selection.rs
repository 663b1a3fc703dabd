//! User selection state: chosen site and payload range.
//!
//! A `Selection` is transient UI state, replaced wholesale on every
//! interaction and passed by value into the chart transforms. Nothing
//! here touches the dataset.

use crate::LaunchRecord;

/// Sentinel dropdown value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Payload slider lower bound (kg).
pub const SLIDER_MIN: f64 = 0.0;
/// Payload slider upper bound (kg).
pub const SLIDER_MAX: f64 = 10000.0;
/// Payload slider step (kg).
pub const SLIDER_STEP: f64 = 1000.0;

/// The site chosen in the dropdown: every site, or one by name.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteSelection {
    /// All launch sites.
    All,
    /// A single launch site by name.
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value, mapping the `ALL` sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value.to_string())
        }
    }

    /// The dropdown value for this selection.
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(name) => name,
        }
    }

    /// Whether a record passes the site filter.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            Self::All => true,
            Self::Site(name) => record.site == *name,
        }
    }
}

/// Inclusive payload mass range in kilograms.
///
/// A range with `min > max` contains nothing; the transforms treat it
/// as an ordinary empty filter rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive containment test.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.min && payload_mass_kg <= self.max
    }
}
