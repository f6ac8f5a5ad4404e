//! Filter criteria for property listing searches
//!
//! Every criterion is optional. Only criteria that pass [`is_provided`] take part
//! in the generated statement, and they always do so in [`FilterKey::CANONICAL`] order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Recognized filter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    City,
    OwnerId,
    MinimumPricePerNight,
    MaximumPricePerNight,
    MinimumRating,
}

impl FilterKey {
    /// Order in which active filters are compiled and bound
    pub const CANONICAL: [FilterKey; 5] = [
        FilterKey::City,
        FilterKey::OwnerId,
        FilterKey::MinimumPricePerNight,
        FilterKey::MaximumPricePerNight,
        FilterKey::MinimumRating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::City => "city",
            FilterKey::OwnerId => "owner_id",
            FilterKey::MinimumPricePerNight => "minimum_price_per_night",
            FilterKey::MaximumPricePerNight => "maximum_price_per_night",
            FilterKey::MinimumRating => "minimum_rating",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional search criteria for property listings.
///
/// Values are kept as raw JSON so that criteria coming from a query string
/// (`"50"`) and from a typed caller (`50`) go through the same coercion rules.
/// Unknown keys are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub city: Option<Value>,
    pub owner_id: Option<Value>,
    pub minimum_price_per_night: Option<Value>,
    pub maximum_price_per_night: Option<Value>,
    pub minimum_rating: Option<Value>,
}

/// A criterion that passed [`is_provided`], borrowed from its [`FilterCriteria`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveFilter<'a> {
    pub key: FilterKey,
    pub value: &'a Value,
}

/// Whether a criterion value should activate its clause.
///
/// Absent values and JSON `null` are not provided. Strings are provided only
/// when they contain something other than whitespace. Numbers are always
/// provided, including `0`, so a zero price bound is honored.
pub fn is_provided(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring of the city name
    pub fn city(mut self, city: impl Into<Value>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: impl Into<Value>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Inclusive lower bound, in major currency units
    pub fn minimum_price_per_night(mut self, price: impl Into<Value>) -> Self {
        self.minimum_price_per_night = Some(price.into());
        self
    }

    /// Inclusive upper bound, in major currency units
    pub fn maximum_price_per_night(mut self, price: impl Into<Value>) -> Self {
        self.maximum_price_per_night = Some(price.into());
        self
    }

    pub fn minimum_rating(mut self, rating: impl Into<Value>) -> Self {
        self.minimum_rating = Some(rating.into());
        self
    }

    /// Raw value stored for a key
    pub fn get(&self, key: FilterKey) -> Option<&Value> {
        match key {
            FilterKey::City => self.city.as_ref(),
            FilterKey::OwnerId => self.owner_id.as_ref(),
            FilterKey::MinimumPricePerNight => self.minimum_price_per_night.as_ref(),
            FilterKey::MaximumPricePerNight => self.maximum_price_per_night.as_ref(),
            FilterKey::MinimumRating => self.minimum_rating.as_ref(),
        }
    }

    /// Active criteria in canonical order
    pub fn normalize(&self) -> Vec<ActiveFilter<'_>> {
        FilterKey::CANONICAL
            .iter()
            .filter_map(|&key| {
                let value = self.get(key);
                if is_provided(value) {
                    value.map(|value| ActiveFilter { key, value })
                } else {
                    None
                }
            })
            .collect()
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.normalize().is_empty()
    }
}
