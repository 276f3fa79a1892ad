//! Pragmatic crate exposes relief distribution planning via simple **pragmatic** json format:
//! a request with depot, demand locations, hazard zones and fleet settings, an optional routing
//! matrix and a plan with per vehicle itineraries and an allocation ledger.
//!
//! # Examples
//!
//! ```
//! use relief_core::prelude::*;
//! use relief_pragmatic::format::problem::PragmaticProblem;
//! use relief_pragmatic::format::solution::create_solution;
//! use std::sync::Arc;
//!
//! let request = r#"{
//!   "strategy": "need",
//!   "parsedNeeds": { "locations": [
//!     { "name": "Puri", "lat": 19.8135, "lon": 85.8312, "needs": { "food": 20 } }
//!   ]},
//!   "vehicleCapacity": 100,
//!   "maxFleetSize": 1,
//!   "timeLimitSeconds": 0.1
//! }"#;
//!
//! let input = request.to_string().read_pragmatic().expect("cannot read request");
//! let planner = Planner::new(Arc::new(PlanningConfig::default()), Arc::new(Environment::default()));
//! let plan = planner.plan(&input.problem).expect("cannot plan");
//! let solution = create_solution(&input.problem, &plan);
//!
//! assert_eq!(solution.summary.assigned_resources, 20);
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

mod utils;
mod validation;

pub mod checker;
pub mod format;

pub use self::format::problem::{PragmaticInput, PragmaticProblem};
pub use self::format::solution::PragmaticSolution;
pub use self::format::{FormatError, MultiFormatError};
