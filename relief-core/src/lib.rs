//! Core crate contains building blocks to plan ***multi-vehicle disaster relief distribution***.
//!
//! A planning request goes strictly forward through the pipeline:
//!
//! - equity allocation decides how much of each demand is served when fleet capacity is scarce,
//!   see [`allocation`];
//! - multimodal matrix builder selects road, sea or air transport per node pair and estimates
//!   distance and duration, see [`transport`] and [`geodesy`];
//! - cost adjuster folds service times and hazard penalties into travel times;
//! - routing model builder encodes everything as a vehicle routing problem with time, distance
//!   and capacity dimensions which is solved by a pluggable solver, see [`routing`];
//! - plan formatter walks the solution into a mode-aware itinerary per vehicle, see [`planning`].
//!
//! Road network, LP solver and routing solver are capabilities behind traits, the crate provides
//! implementations which work without any external service.
//!
//! # Examples
//!
//! ```
//! use relief_core::prelude::*;
//! use std::collections::BTreeMap;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let needs = |water: i64| BTreeMap::from([("water".to_string(), water)]);
//! let problem = ReliefProblem {
//!     strategy: Strategy::Welfare,
//!     depot: Depot { name: "Base".to_string(), coordinate: Coordinate::new(20.2444, 85.8172) },
//!     locations: vec![
//!         Location::new("Puri", Coordinate::new(19.8135, 85.8312), needs(10)),
//!         Location::new("Cuttack", Coordinate::new(20.4625, 85.8830), needs(10)),
//!     ],
//!     blocked_zones: vec![],
//!     fleet: Fleet::homogeneous(2, 15),
//!     time_limit: Some(Duration::from_millis(100)),
//! };
//!
//! let planner = Planner::new(Arc::new(PlanningConfig::default()), Arc::new(Environment::default()));
//! let plan = planner.plan(&problem).expect("cannot plan");
//!
//! assert!(plan.assigned_resources() <= 30);
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod allocation;
pub mod geodesy;
pub mod models;
pub mod planning;
pub mod prelude;
pub mod routing;
pub mod transport;
pub mod utils;
