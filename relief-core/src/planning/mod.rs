//! Planning module chains all components into a single pipeline:
//! allocation, matrices, adjusted costs, routing model, solution and plan.

#[cfg(test)]
#[path = "../../tests/unit/planning/planner_test.rs"]
mod planner_test;

mod formatter;
pub use self::formatter::*;

use crate::allocation::{BoundedSumLpSolver, LpSolver, allocate_equitably, get_priorities};
use crate::models::*;
use crate::routing::{GuidedLocalSearchSolver, RoutingSolver, build_routing_model};
use crate::transport::{NoRoadNetwork, RoadNetwork, adjust_costs, build_travel_matrix};
use crate::utils::{Environment, PlanningError, Timer};
use std::sync::Arc;

/// Plans relief distribution using pluggable road network, LP and routing solver capabilities.
pub struct Planner {
    config: Arc<PlanningConfig>,
    environment: Arc<Environment>,
    road_network: Arc<dyn RoadNetwork>,
    lp_solver: Arc<dyn LpSolver>,
    routing_solver: Arc<dyn RoutingSolver>,
}

impl Planner {
    /// Creates a planner with physics-only travel estimations and built-in solvers.
    pub fn new(config: Arc<PlanningConfig>, environment: Arc<Environment>) -> Self {
        Self {
            config,
            environment,
            road_network: Arc::new(NoRoadNetwork::default()),
            lp_solver: Arc::new(BoundedSumLpSolver::default()),
            routing_solver: Arc::new(GuidedLocalSearchSolver::default()),
        }
    }

    /// Sets road network.
    pub fn with_road_network(mut self, road_network: Arc<dyn RoadNetwork>) -> Self {
        self.road_network = road_network;
        self
    }

    /// Sets LP solver.
    pub fn with_lp_solver(mut self, lp_solver: Arc<dyn LpSolver>) -> Self {
        self.lp_solver = lp_solver;
        self
    }

    /// Sets routing solver.
    pub fn with_routing_solver(mut self, routing_solver: Arc<dyn RoutingSolver>) -> Self {
        self.routing_solver = routing_solver;
        self
    }

    /// Returns planning configuration.
    pub fn config(&self) -> &PlanningConfig {
        self.config.as_ref()
    }

    /// Plans the problem. Only invalid input and missing routing solution are surfaced as errors,
    /// road network and LP solver failures are absorbed by fallbacks.
    pub fn plan(&self, problem: &ReliefProblem) -> Result<Plan, PlanningError> {
        problem.validate().map_err(PlanningError::InvalidInput)?;

        let timer = Timer::start();
        let config = self.config.as_ref();
        let environment = self.environment.as_ref();

        environment.log(&format!(
            "planning {} locations with {} vehicles, strategy: {}",
            problem.locations.len(),
            problem.fleet.size(),
            problem.strategy.name()
        ));

        let priorities = get_priorities(problem);
        let allocation = allocate_equitably(
            &problem.raw_demands(),
            problem.fleet.total_capacity(),
            &priorities,
            config.allocation.equity_floor,
            self.lp_solver.as_ref(),
            environment,
        );
        environment.log(&format!(
            "allocation outcome: {:?}, allocated {} units",
            allocation.outcome,
            allocation.amounts.iter().copied().fold(0, Load::saturating_add)
        ));

        let coordinates = problem.coordinates();
        let matrix = build_travel_matrix(&coordinates, self.road_network.as_ref(), &config.transport, environment);

        let demands = std::iter::once(0).chain(allocation.amounts.iter().copied()).collect::<Vec<_>>();
        let costs = adjust_costs(&matrix, &coordinates, &demands, &problem.blocked_zones, &config.costs);

        let time_limit = problem.time_limit.unwrap_or(config.routing.time_limit);
        let model = build_routing_model(&matrix, &costs, &demands, &problem.fleet, &config.routing, time_limit)?;

        let is_long_haul = matrix.has_long_haul();
        environment.log(&format!(
            "routing model: shift ceiling {}s, distance ceiling {}m, time limit {}ms",
            config.routing.shift_time.get(is_long_haul),
            config.routing.vehicle_distance.get(is_long_haul),
            time_limit.as_millis()
        ));

        let assignment = self.routing_solver.solve(&model, environment).ok_or(PlanningError::NoSolution)?;

        let ctx = PlanContext {
            problem,
            matrix: &matrix,
            allocation: &allocation,
            model: &model,
            network: self.road_network.as_ref(),
        };
        let plan = format_plan(&ctx, &assignment);

        environment.log(&format!(
            "plan is ready in {}ms: {} routes, distance {:.0}m, delivered {} of {} units, {} unassigned",
            timer.elapsed_millis(),
            plan.routes.len(),
            plan.total_distance(),
            plan.assigned_resources(),
            plan.total_resources(),
            plan.unassigned.len()
        ));

        Ok(plan)
    }
}
