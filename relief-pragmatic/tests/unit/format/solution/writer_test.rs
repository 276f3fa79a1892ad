use super::*;
use crate::format::problem::PragmaticProblem;
use crate::helpers::*;
use relief_core::models::{Coordinate, LocationAllocation, Route as CoreRoute, Segment as CoreSegment, TransportMode};
use relief_core::models::Stop as CoreStop;
use std::io::BufReader;

fn create_problem() -> ReliefProblem {
    create_two_locations_request().read_pragmatic().expect("cannot read request").problem
}

fn create_segment(from: usize, to: usize, mode: TransportMode, geometry: Vec<Coordinate>, distance: f64) -> CoreSegment {
    CoreSegment { from, to, mode, geometry, distance }
}

fn create_plan(unassigned: Vec<usize>) -> Plan {
    Plan {
        routes: vec![CoreRoute {
            vehicle_id: "vehicle_1".to_string(),
            vehicle_type: TransportMode::Road,
            stops: vec![CoreStop { node: 2, load: 20, eta: 100 }, CoreStop { node: 1, load: 10, eta: 300 }],
            segments: vec![
                create_segment(0, 2, TransportMode::Road, vec![Coordinate::new(20., 85.), Coordinate::new(20.5, 85.9)], 100.),
                create_segment(2, 1, TransportMode::Sea, vec![], 200.),
                create_segment(1, 0, TransportMode::Road, vec![], 50.),
            ],
            load: 30,
            distance: 350.,
        }],
        allocations: vec![
            LocationAllocation { location: 0, requested: 10, allocated: 10 },
            LocationAllocation { location: 1, requested: 20, allocated: 20 },
        ],
        allocation_outcome: AllocationOutcome::Optimized,
        unassigned,
        source: MatrixSource::Physics,
    }
}

#[test]
fn can_create_summary() {
    let solution = create_solution(&create_problem(), &create_plan(vec![]));

    assert_eq!(solution.status, "success");
    assert_eq!(solution.source, "physics");
    assert_eq!(
        solution.summary,
        Summary {
            strategy: "welfare".to_string(),
            total_distance_meters: 350.,
            total_resources: 30,
            assigned_resources: 30,
            total_trucks: 1,
            allocation: "optimized".to_string(),
        }
    );
    assert_eq!(solution.depot, Place { name: "Base".to_string(), lat: 20.2444, lon: 85.8172 });
}

#[test]
fn can_create_route_with_names() {
    let solution = create_solution(&create_problem(), &create_plan(vec![]));

    let route = &solution.routes[0];
    assert_eq!(route.vehicle_type, "road");
    assert_eq!(route.load, 30);
    assert_eq!(route.distance_meters, 350.);
    assert_eq!(
        route.stops,
        vec![
            Stop { name: "Cuttack".to_string(), load: 20, eta: 100 },
            Stop { name: "Puri".to_string(), load: 10, eta: 300 }
        ]
    );
    assert_eq!(
        route.segments.iter().map(|segment| (segment.from.as_str(), segment.to.as_str(), segment.mode.as_str())).collect::<Vec<_>>(),
        vec![("Base", "Cuttack", "road"), ("Cuttack", "Puri", "sea"), ("Puri", "Base", "road")]
    );
    assert_eq!(route.segments[1].distance_leg, 200.);
}

#[test]
fn can_write_geometry_as_lon_lat_pairs() {
    let solution = create_solution(&create_problem(), &create_plan(vec![]));

    assert_eq!(solution.routes[0].segments[0].geometry, vec![[85., 20.], [85.9, 20.5]]);
}

#[test]
fn can_create_ledger_and_unassigned() {
    let solution = create_solution(&create_problem(), &create_plan(vec![1]));

    assert_eq!(solution.locations.len(), 2);
    assert_eq!(solution.locations[1].name, "Cuttack");
    assert_eq!(solution.locations[1].needs.get("food"), Some(&5));
    assert_eq!(solution.locations[1].requested, 20);
    assert_eq!(solution.unassigned, vec!["Cuttack".to_string()]);
}

#[test]
fn can_write_pragmatic_json_in_camel_case() {
    let problem = create_problem();
    let mut buffer = Vec::new();

    create_plan(vec![]).write_pragmatic_json(&problem, BufWriter::new(&mut buffer)).expect("cannot write");

    let json = String::from_utf8(buffer).expect("not utf8");
    assert!(json.contains("\"totalDistanceMeters\""));
    assert!(json.contains("\"vehicleType\": \"road\""));
    assert!(json.contains("\"distanceLeg\""));

    let solution = deserialize_solution(BufReader::new(json.as_bytes())).expect("cannot read solution");
    assert_eq!(solution, create_solution(&problem, &create_plan(vec![])));
}
