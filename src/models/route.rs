//! Result groups returned by the hotel-search API

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::TravelAiError;

/// Distance from the city centre, unit is opaque
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Distance {
    pub value: f64,
    pub unit: String,
}

/// One lodging option
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Hotel {
    pub name: String,
    pub rating: f64,
    pub distance: Distance,
}

/// One itinerary suggestion: a description, its hotels and amenities
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Route {
    pub description: String,
    pub data: Vec<Hotel>,
    pub amenities: Vec<String>,
}

impl Display for Distance {
    /// `2km`, no space between value and unit
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl Hotel {
    /// Format rating with the star prefix
    #[must_use]
    pub fn format_rating(&self) -> String {
        format!("⭐ {}", self.rating)
    }
}

impl Route {
    /// Amenities joined for display
    #[must_use]
    pub fn format_amenities(&self) -> String {
        self.amenities.join(", ")
    }
}

/// Decode an upstream body into result groups
pub fn decode_routes(raw: &RawValue) -> Result<Vec<Route>, TravelAiError> {
    serde_json::from_str(raw.get()).map_err(|e| {
        TravelAiError::invalid_response(format!("Unexpected result shape: {e}"))
    })
}
