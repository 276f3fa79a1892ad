#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use crate::format::solution::*;
use relief_core::models::{AllocationOutcome, MatrixSource, Plan, ReliefProblem};
use std::io::{BufWriter, Write};

type ApiRoute = crate::format::solution::Route;
type ApiSegment = crate::format::solution::Segment;
type ApiSolution = crate::format::solution::Solution;
type DomainRoute = relief_core::models::Route;

/// A trait to serialize plan in pragmatic format.
pub trait PragmaticSolution<W: Write> {
    /// Serializes plan in pragmatic json format.
    fn write_pragmatic_json(&self, problem: &ReliefProblem, writer: BufWriter<W>) -> Result<(), String>;
}

impl<W: Write> PragmaticSolution<W> for Plan {
    fn write_pragmatic_json(&self, problem: &ReliefProblem, writer: BufWriter<W>) -> Result<(), String> {
        let solution = create_solution(problem, self);
        serialize_solution(writer, &solution).map_err(|err| err.to_string())
    }
}

/// Creates solution.
pub fn create_solution(problem: &ReliefProblem, plan: &Plan) -> ApiSolution {
    let routes = plan.routes.iter().map(|route| create_route(problem, route)).collect::<Vec<_>>();

    let locations = plan
        .allocations
        .iter()
        .map(|allocation| {
            let location = &problem.locations[allocation.location];
            LocationInfo {
                name: location.name.clone(),
                lat: location.coordinate.lat,
                lon: location.coordinate.lng,
                needs: location.needs.clone(),
                requested: allocation.requested,
                allocated: allocation.allocated,
            }
        })
        .collect();

    let unassigned = plan.unassigned.iter().map(|&location| problem.locations[location].name.clone()).collect();

    let summary = Summary {
        strategy: problem.strategy.name().to_string(),
        total_distance_meters: plan.total_distance(),
        total_resources: plan.total_resources(),
        assigned_resources: plan.assigned_resources(),
        total_trucks: routes.len(),
        allocation: get_allocation_name(plan.allocation_outcome).to_string(),
    };

    let depot = Place {
        name: problem.depot.name.clone(),
        lat: problem.depot.coordinate.lat,
        lon: problem.depot.coordinate.lng,
    };

    ApiSolution {
        status: "success".to_string(),
        source: get_source_name(plan.source).to_string(),
        summary,
        depot,
        routes,
        locations,
        unassigned,
    }
}

fn create_route(problem: &ReliefProblem, route: &DomainRoute) -> ApiRoute {
    ApiRoute {
        vehicle_id: route.vehicle_id.clone(),
        vehicle_type: route.vehicle_type.name().to_string(),
        distance_meters: route.distance,
        load: route.load,
        stops: route
            .stops
            .iter()
            .map(|stop| Stop { name: problem.node_name(stop.node).to_string(), load: stop.load, eta: stop.eta })
            .collect(),
        segments: route
            .segments
            .iter()
            .map(|segment| ApiSegment {
                from: problem.node_name(segment.from).to_string(),
                to: problem.node_name(segment.to).to_string(),
                mode: segment.mode.name().to_string(),
                geometry: segment.geometry.iter().map(|coordinate| [coordinate.lng, coordinate.lat]).collect(),
                distance_leg: segment.distance,
            })
            .collect(),
    }
}

fn get_allocation_name(outcome: AllocationOutcome) -> &'static str {
    match outcome {
        AllocationOutcome::Unconstrained => "unconstrained",
        AllocationOutcome::Optimized => "optimized",
        AllocationOutcome::Proportional => "proportional",
        AllocationOutcome::Unmodified => "unmodified",
    }
}

fn get_source_name(source: MatrixSource) -> &'static str {
    match source {
        MatrixSource::RoadNetwork => "roadNetwork",
        MatrixSource::Physics => "physics",
    }
}
