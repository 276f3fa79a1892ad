#[cfg(test)]
#[path = "../../tests/unit/planning/formatter_test.rs"]
mod formatter_test;

use crate::allocation::Allocation;
use crate::models::*;
use crate::routing::{Assignment, DimensionKind, RoutingModel, Tour};
use crate::transport::{RoadNetwork, TravelMatrix};
use crate::utils::parallel_collect;

/// Keeps everything needed to turn a routing assignment into a plan.
pub struct PlanContext<'a> {
    /// Planned problem.
    pub problem: &'a ReliefProblem,
    /// Travel matrix used to build the routing model.
    pub matrix: &'a TravelMatrix,
    /// Allocation of location demands, depot excluded.
    pub allocation: &'a Allocation,
    /// Routing model.
    pub model: &'a RoutingModel,
    /// Road network used to fetch display geometry.
    pub network: &'a dyn RoadNetwork,
}

/// Walks every vehicle tour into stops and segments. Vehicles without stops are omitted. Road geometry is
/// fetched only when travel data came from the road network.
pub fn format_plan(ctx: &PlanContext, assignment: &Assignment) -> Plan {
    let tours = assignment.tours.iter().filter(|tour| !tour.is_empty()).collect::<Vec<_>>();
    let routes = parallel_collect(&tours, |tour| format_route(ctx, tour));

    let allocations = ctx
        .problem
        .locations
        .iter()
        .zip(ctx.allocation.amounts.iter())
        .enumerate()
        .map(|(location, (loc, &allocated))| LocationAllocation { location, requested: loc.total_demand(), allocated })
        .collect();

    Plan {
        routes,
        allocations,
        allocation_outcome: ctx.allocation.outcome,
        unassigned: assignment.dropped.iter().map(|&node| node - 1).collect(),
        source: ctx.matrix.source(),
    }
}

/// Returns the mode used by most segments, ties are resolved in road, sea, air order.
pub fn get_vehicle_type(segments: &[Segment]) -> TransportMode {
    TransportMode::ALL
        .iter()
        .map(|&mode| (mode, segments.iter().filter(|segment| segment.mode == mode).count()))
        .fold((TransportMode::Road, 0), |best, (mode, count)| if count > best.1 { (mode, count) } else { best })
        .0
}

fn format_route(ctx: &PlanContext, tour: &&Tour) -> Route {
    let time_dimension = ctx.model.dimension_index(DimensionKind::Time);
    let coordinates = ctx.problem.coordinates();

    let stops = tour
        .nodes
        .iter()
        .enumerate()
        .filter(|&(_, &node)| node != ctx.model.depot)
        .map(|(position, &node)| Stop {
            node,
            load: ctx.allocation.amounts[node - 1],
            eta: time_dimension.and_then(|dimension| tour.cumul(dimension, position)).unwrap_or(0),
        })
        .collect::<Vec<_>>();

    let segments = tour
        .nodes
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let mode = ctx.matrix.mode(from, to);
            let straight = vec![coordinates[from], coordinates[to]];

            // road network was unreachable while building matrix, do not query it again
            let geometry = match (mode, ctx.matrix.source()) {
                (TransportMode::Road, MatrixSource::RoadNetwork) => ctx.network.geometry(&straight).unwrap_or(straight),
                _ => straight,
            };

            Segment { from, to, mode, geometry, distance: ctx.matrix.distance(from, to) }
        })
        .collect::<Vec<_>>();

    Route {
        vehicle_id: ctx.problem.fleet.vehicles[tour.vehicle].id.clone(),
        vehicle_type: get_vehicle_type(&segments),
        load: stops.iter().map(|stop| stop.load).fold(0, Load::saturating_add),
        distance: segments.iter().map(|segment| segment.distance).sum(),
        stops,
        segments,
    }
}
