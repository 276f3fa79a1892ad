//! Common primitive types shared by all models.

#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

use std::fmt;

/// Represents a distance in meters.
pub type Distance = f64;

/// Represents a duration in seconds.
pub type Duration = f64;

/// Represents an amount of goods (units or kilograms).
pub type Load = i64;

/// Represents a geo coordinate in degrees, WGS-84 assumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if latitude and longitude are finite and within their ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && self.lat.abs() <= 90. && self.lng.abs() <= 180.
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lat={}, lng={}", self.lat, self.lng)
    }
}
