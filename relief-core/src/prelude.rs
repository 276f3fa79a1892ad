//! This module reimports commonly used types.

pub use crate::models::{
    BlockedZone, Coordinate, Depot, Fleet, Load, Location, Needs, Plan, PlanningConfig, ReliefProblem, Strategy,
    Vehicle,
};
pub use crate::planning::Planner;

pub use crate::allocation::LpSolver;
pub use crate::routing::RoutingSolver;
pub use crate::transport::{NoRoadNetwork, RoadMatrix, RoadNetwork};

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger, PlanningError};
