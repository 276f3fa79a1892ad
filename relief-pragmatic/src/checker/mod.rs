//! This module provides functionality to automatically check that given plan is feasible
//! which means that there is no constraint violations.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::problem::*;
use crate::format::solution::*;
use std::collections::{HashMap, HashSet};

mod assignment;
use self::assignment::check_assignment;

mod capacity;
use self::capacity::check_vehicle_load;

mod summary;
use self::summary::check_summary;

/// Stores request and plan together and provides some helper methods.
pub struct CheckerContext {
    /// An original request.
    pub request: Request,
    /// A plan to be checked.
    pub solution: Solution,

    location_map: HashMap<String, Location>,
}

impl CheckerContext {
    /// Creates an instance of `CheckerContext`.
    pub fn new(request: Request, solution: Solution) -> Self {
        let location_map =
            request.locations().iter().map(|location| (location.name.clone(), location.clone())).collect();

        Self { request, solution, location_map }
    }

    /// Performs plan check.
    pub fn check(&self) -> Result<(), Vec<String>> {
        // avoid duplicates keeping original order
        let (_, errors) = check_vehicle_load(self)
            .err()
            .into_iter()
            .chain(check_assignment(self).err())
            .chain(check_summary(self).err())
            .flatten()
            .fold((HashSet::new(), Vec::default()), |(mut used, mut errors), error| {
                if !used.contains(&error) {
                    errors.push(error.clone());
                    used.insert(error);
                }

                (used, errors)
            });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Gets location by its name.
    fn get_location(&self, name: &str) -> Result<&Location, String> {
        self.location_map.get(name).ok_or_else(|| format!("cannot find location with name '{name}'"))
    }
}

/// Returns true if two distances are equal within rounding error.
fn is_same_distance(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1E-6 * left.abs().max(right.abs()).max(1.)
}
