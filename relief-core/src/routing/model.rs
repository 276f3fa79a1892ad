#[cfg(test)]
#[path = "../../tests/unit/routing/model_test.rs"]
mod model_test;

use crate::models::{Fleet, Load, RoutingConfig};
use crate::transport::{AdjustedCosts, TravelMatrix};
use crate::utils::GenericResult;
use std::time::Duration as TimeSpan;

/// A named cumulative quantity tracked along each route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    /// Adjusted travel time including service time.
    Time,
    /// Raw travel distance.
    Distance,
    /// Delivered load.
    Capacity,
}

/// Specifies how a dimension value changes when a vehicle moves over an arc.
#[derive(Clone, Debug)]
pub enum Transit {
    /// Depends on both ends of the arc, stored row-major.
    Arc {
        /// Amount of nodes.
        size: usize,
        /// Values.
        values: Vec<i64>,
    },
    /// Depends on the origin node only.
    Unary(Vec<i64>),
}

impl Transit {
    /// Returns transit value of the arc.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        match self {
            Transit::Arc { size, values } => values[from * size + to],
            Transit::Unary(values) => values[from],
        }
    }
}

/// A routing dimension.
#[derive(Clone, Debug)]
pub struct Dimension {
    /// Dimension kind.
    pub kind: DimensionKind,
    /// Transit callback.
    pub transit: Transit,
    /// Max slack allowed at each node. Matters only to solvers which model waiting: the built-in solver
    /// starts every route at zero and never waits, so it does not read it.
    pub slack_max: i64,
    /// Per vehicle ceiling of cumulative value.
    pub capacities: Vec<i64>,
    /// Whether cumulative value starts at zero.
    pub fix_start_cumul_to_zero: bool,
    /// Coefficient of the span between the latest route end and the earliest route start.
    pub global_span_cost_coefficient: i64,
}

/// Specifies how the first solution is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstSolutionStrategy {
    /// Extends each route with the node reachable by the cheapest arc.
    PathCheapestArc,
}

/// Specifies how the first solution is refined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalSearchMetaheuristic {
    /// Stops at the first local optimum.
    GreedyDescent,
    /// Escapes local optima by penalizing expensive arcs.
    GuidedLocalSearch,
}

/// Routing search parameters.
#[derive(Clone, Debug)]
pub struct SearchParameters {
    /// First solution heuristic.
    pub first_solution_strategy: FirstSolutionStrategy,
    /// Refinement metaheuristic.
    pub local_search_metaheuristic: LocalSearchMetaheuristic,
    /// Wall-clock search budget.
    pub time_limit: TimeSpan,
    /// Max amount of metaheuristic iterations.
    pub iteration_limit: Option<usize>,
}

/// Cost summary of a single route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteCost {
    /// Sum of arc costs.
    pub arc_cost: i64,
    /// Cumulative value at route end per dimension.
    pub ends: Vec<i64>,
    /// True if route visits at least one node.
    pub is_used: bool,
}

/// A vehicle routing problem: node 0 is depot, start and end of every vehicle.
#[derive(Clone, Debug)]
pub struct RoutingModel {
    /// Amount of nodes including depot.
    pub node_count: usize,
    /// Amount of vehicles.
    pub vehicle_count: usize,
    /// Depot node.
    pub depot: usize,
    /// Dimensions.
    pub dimensions: Vec<Dimension>,
    /// Index of the dimension which transit is used as arc cost.
    pub arc_cost_dimension: usize,
    /// Penalty of dropping a node, `None` means the node is mandatory.
    pub drop_penalties: Vec<Option<i64>>,
    /// Search parameters.
    pub search: SearchParameters,
}

impl RoutingModel {
    /// Returns arc cost.
    pub fn arc_cost(&self, from: usize, to: usize) -> i64 {
        self.dimensions[self.arc_cost_dimension].transit.get(from, to)
    }

    /// Returns index of dimension with given kind.
    pub fn dimension_index(&self, kind: DimensionKind) -> Option<usize> {
        self.dimensions.iter().position(|dimension| dimension.kind == kind)
    }

    /// Returns cumulative values per dimension at each position of the depot-to-depot path or
    /// `None` if any ceiling is exceeded.
    pub fn get_cumuls(&self, vehicle: usize, path: &[usize]) -> Option<Vec<Vec<i64>>> {
        self.dimensions
            .iter()
            .map(|dimension| {
                let capacity = dimension.capacities[vehicle];
                let mut cumul: i64 = 0;
                let mut cumuls = Vec::with_capacity(path.len());
                cumuls.push(cumul);

                for pair in path.windows(2) {
                    cumul = cumul.saturating_add(dimension.transit.get(pair[0], pair[1]));
                    if cumul > capacity {
                        return None;
                    }
                    cumuls.push(cumul);
                }

                Some(cumuls)
            })
            .collect()
    }

    /// Evaluates a route which visits `nodes` (depot excluded) or returns `None` if infeasible.
    pub fn route_cost(&self, vehicle: usize, nodes: &[usize]) -> Option<RouteCost> {
        let mut ends = vec![0_i64; self.dimensions.len()];
        let mut arc_cost: i64 = 0;
        let mut from = self.depot;

        for to in nodes.iter().copied().chain(std::iter::once(self.depot)) {
            for (dimension, end) in self.dimensions.iter().zip(ends.iter_mut()) {
                *end = end.saturating_add(dimension.transit.get(from, to));
                if *end > dimension.capacities[vehicle] {
                    return None;
                }
            }

            arc_cost = arc_cost.saturating_add(self.arc_cost(from, to));
            from = to;
        }

        Some(RouteCost { arc_cost, ends, is_used: !nodes.is_empty() })
    }

    /// Returns objective value: arc costs, span costs and penalties of dropped nodes.
    ///
    /// Route starts are fixed at zero, so the span is the latest end among used routes.
    pub fn objective(&self, routes: &[RouteCost], dropped: &[usize]) -> i64 {
        let arc_cost = routes.iter().map(|route| route.arc_cost).fold(0, i64::saturating_add);

        let span_cost: i64 = self
            .dimensions
            .iter()
            .enumerate()
            .filter(|(_, dimension)| dimension.global_span_cost_coefficient > 0)
            .map(|(idx, dimension)| {
                let span = routes.iter().filter(|route| route.is_used).map(|route| route.ends[idx]).max().unwrap_or(0);
                dimension.global_span_cost_coefficient.saturating_mul(span)
            })
            .fold(0, i64::saturating_add);

        let penalty = dropped.iter().filter_map(|&node| self.drop_penalties[node]).fold(0, i64::saturating_add);

        arc_cost.saturating_add(span_cost).saturating_add(penalty)
    }

    /// Checks model consistency.
    pub fn validate(&self) -> GenericResult<()> {
        if self.node_count == 0 || self.depot >= self.node_count {
            return Err("routing model has no depot".into());
        }

        if self.vehicle_count == 0 {
            return Err("routing model has no vehicles".into());
        }

        if self.arc_cost_dimension >= self.dimensions.len() {
            return Err("arc cost dimension is not defined".into());
        }

        if self.drop_penalties.len() != self.node_count {
            return Err("drop penalties should be defined for every node".into());
        }

        self.dimensions.iter().try_for_each(|dimension| {
            let is_size_valid = match &dimension.transit {
                Transit::Arc { size, values } => *size == self.node_count && values.len() == size * size,
                Transit::Unary(values) => values.len() == self.node_count,
            };

            if !is_size_valid {
                return Err(format!("{:?} dimension transit does not match node count", dimension.kind).into());
            }

            if dimension.capacities.len() != self.vehicle_count {
                return Err(format!("{:?} dimension capacities do not match vehicle count", dimension.kind).into());
            }

            Ok(())
        })
    }
}

/// Encodes adjusted travel costs, raw distances and allocated demands as a routing model.
pub fn build_routing_model(
    matrix: &TravelMatrix,
    costs: &AdjustedCosts,
    demands: &[Load],
    fleet: &Fleet,
    config: &RoutingConfig,
    time_limit: TimeSpan,
) -> GenericResult<RoutingModel> {
    let size = matrix.size();
    let vehicle_count = fleet.size();
    let is_long_haul = matrix.has_long_haul();

    let arc_values = |value_fn: &dyn Fn(usize, usize) -> f64| {
        (0..size)
            .flat_map(|from| (0..size).map(move |to| (from, to)))
            .map(|(from, to)| value_fn(from, to) as i64)
            .collect()
    };

    let time = Dimension {
        kind: DimensionKind::Time,
        transit: Transit::Arc { size, values: arc_values(&|from, to| costs.time(from, to)) },
        slack_max: config.time_slack,
        capacities: vec![config.shift_time.get(is_long_haul); vehicle_count],
        fix_start_cumul_to_zero: true,
        global_span_cost_coefficient: config.span_cost_coefficient,
    };

    let distance = Dimension {
        kind: DimensionKind::Distance,
        transit: Transit::Arc { size, values: arc_values(&|from, to| matrix.distance(from, to)) },
        slack_max: 0,
        capacities: vec![config.vehicle_distance.get(is_long_haul); vehicle_count],
        fix_start_cumul_to_zero: true,
        global_span_cost_coefficient: 0,
    };

    let capacity = Dimension {
        kind: DimensionKind::Capacity,
        transit: Transit::Unary(demands.to_vec()),
        slack_max: 0,
        capacities: fleet.vehicles.iter().map(|vehicle| vehicle.capacity).collect(),
        fix_start_cumul_to_zero: true,
        global_span_cost_coefficient: 0,
    };

    let model = RoutingModel {
        node_count: size,
        vehicle_count,
        depot: 0,
        dimensions: vec![time, distance, capacity],
        arc_cost_dimension: 0,
        drop_penalties: (0..size).map(|node| if node == 0 { None } else { Some(config.drop_penalty) }).collect(),
        search: SearchParameters {
            first_solution_strategy: FirstSolutionStrategy::PathCheapestArc,
            local_search_metaheuristic: LocalSearchMetaheuristic::GuidedLocalSearch,
            time_limit,
            iteration_limit: config.iteration_limit,
        },
    };

    model.validate()?;

    Ok(model)
}
