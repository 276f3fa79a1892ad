//! Planning configuration: an immutable set of constants passed into every component.

#[cfg(test)]
#[path = "../../tests/unit/models/config_test.rs"]
mod config_test;

use crate::models::common::{Distance, Duration};
use crate::transport::ModeRule;
use std::time::Duration as TimeSpan;

/// Configures equity allocation.
#[derive(Clone, Debug)]
pub struct AllocationConfig {
    /// A minimum fraction of a demand which has to be allocated to a served location.
    pub equity_floor: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self { equity_floor: 0.2 }
    }
}

/// Configures multimodal transport estimations.
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Air speed, m/s.
    pub air_speed: f64,
    /// Fixed docking time added to every air leg.
    pub docking_time: Duration,
    /// Sea speed, m/s.
    pub sea_speed: f64,
    /// Generic road speed used when road network is unavailable, m/s.
    pub road_speed: f64,
    /// Ordered list of mode rules, first matching rule wins.
    pub mode_rules: Vec<ModeRule>,
}

impl TransportConfig {
    /// Default great-circle distance above which air transport is preferred.
    pub const AIR_THRESHOLD: Distance = 600_000.;

    /// Default ratio of road to great-circle distance which signals a water obstacle.
    pub const DETOUR_RATIO: f64 = 3.;
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            air_speed: 220.,
            docking_time: 3600.,
            sea_speed: 8.5,
            road_speed: 13.,
            mode_rules: ModeRule::default_rules(Self::AIR_THRESHOLD, Self::DETOUR_RATIO),
        }
    }
}

/// Configures adjustments of raw travel times.
#[derive(Clone, Debug)]
pub struct CostConfig {
    /// Fixed overhead of every stop.
    pub fixed_stop_time: Duration,
    /// Loading time per unit of allocated load.
    pub loading_time_per_unit: Duration,
    /// Multiplier applied to the duration of a leg which ends inside a blocked zone.
    pub hazard_multiplier: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self { fixed_stop_time: 900., loading_time_per_unit: 2., hazard_multiplier: 1000. }
    }
}

/// A ceiling which depends on whether plan contains long-haul (air or sea) legs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limit {
    /// Ceiling for road only plans.
    pub regular: i64,
    /// Ceiling for multimodal plans.
    pub long_haul: i64,
}

impl Limit {
    /// Returns a ceiling for the given plan kind.
    pub fn get(&self, is_long_haul: bool) -> i64 {
        if is_long_haul { self.long_haul } else { self.regular }
    }
}

/// Configures routing model.
#[derive(Clone, Debug)]
pub struct RoutingConfig {
    /// Allowed waiting time at a node, seconds.
    pub time_slack: i64,
    /// Max shift duration per vehicle, seconds.
    pub shift_time: Limit,
    /// Max distance per vehicle, meters.
    pub vehicle_distance: Limit,
    /// Global span cost coefficient of time dimension.
    pub span_cost_coefficient: i64,
    /// A penalty for not visiting a location.
    pub drop_penalty: i64,
    /// Search time budget.
    pub time_limit: TimeSpan,
    /// Max amount of local search restarts, unlimited if not set.
    pub iteration_limit: Option<usize>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            time_slack: 3600,
            shift_time: Limit { regular: 43_200, long_haul: 86_400 },
            vehicle_distance: Limit { regular: 800_000, long_haul: 5_000_000 },
            span_cost_coefficient: 5000,
            drop_penalty: 1_000_000_000,
            time_limit: TimeSpan::from_secs(10),
            iteration_limit: None,
        }
    }
}

/// A planning configuration.
#[derive(Clone, Debug, Default)]
pub struct PlanningConfig {
    /// Allocation settings.
    pub allocation: AllocationConfig,
    /// Transport settings.
    pub transport: TransportConfig,
    /// Cost adjustment settings.
    pub costs: CostConfig,
    /// Routing settings.
    pub routing: RoutingConfig,
}

impl PlanningConfig {
    /// Sets allocation settings.
    pub fn with_allocation(mut self, allocation: AllocationConfig) -> Self {
        self.allocation = allocation;
        self
    }

    /// Sets transport settings.
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    /// Sets cost settings.
    pub fn with_costs(mut self, costs: CostConfig) -> Self {
        self.costs = costs;
        self
    }

    /// Sets routing settings.
    pub fn with_routing(mut self, routing: RoutingConfig) -> Self {
        self.routing = routing;
        self
    }
}
