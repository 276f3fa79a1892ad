//! This module provides functionality to validate relief request for logical correctness.

use crate::format::problem::*;
use crate::format::{FormatError, MultiFormatError};
use crate::utils::combine_error_results;

/// Keeps request and optional routing matrix to be validated.
pub struct ValidationContext<'a> {
    /// A relief request.
    pub request: &'a Request,
    /// A routing matrix.
    pub matrix: Option<&'a Matrix>,
}

mod fleet;
use self::fleet::validate_fleet;

mod locations;
use self::locations::validate_locations;

mod routing;
use self::routing::validate_routing;

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(request: &'a Request, matrix: Option<&'a Matrix>) -> Self {
        Self { request, matrix }
    }

    /// Validates request on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = [validate_locations(self), validate_fleet(self), validate_routing(self)]
            .into_iter()
            .flat_map(|result| result.err().into_iter().flatten())
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    /// Get list of locations from the request.
    fn locations(&self) -> impl Iterator<Item = &Location> {
        self.request.locations().iter()
    }
}

fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && lat.abs() <= 90. && lon.abs() <= 180.
}
