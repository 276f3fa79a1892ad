use super::*;
use crate::helpers::*;

fn check_solution(solution: Solution, fleet_size: i64) -> Result<(), Vec<String>> {
    let request = Request { max_fleet_size: Some(fleet_size), ..create_two_locations_request() };

    check_summary(&CheckerContext::new(request, solution))
}

#[test]
fn can_accept_consistent_summary() {
    assert_eq!(check_solution(create_two_locations_solution(), 1), Ok(()));
}

#[test]
fn can_detect_too_many_routes() {
    let solution = create_solution_with_routes(
        vec![
            create_route("vehicle_1", vec![create_stop("Puri", 10)]),
            create_route("vehicle_2", vec![create_stop("Cuttack", 20)]),
        ],
        create_two_locations_solution().locations,
        vec![],
    );

    assert_eq!(check_solution(solution, 1), Err(vec!["2 routes are present, but fleet has only 1 vehicles".to_string()]));
}

#[test]
fn can_detect_reused_vehicle() {
    let solution = create_solution_with_routes(
        vec![
            create_route("vehicle_1", vec![create_stop("Puri", 10)]),
            create_route("vehicle_1", vec![create_stop("Cuttack", 20)]),
        ],
        create_two_locations_solution().locations,
        vec![],
    );

    assert_eq!(check_solution(solution, 2), Err(vec!["vehicle 'vehicle_1' is used more than once".to_string()]));
}

parameterized_test! {can_detect_inconsistent_totals, (modify, expected), {
    let mut solution = create_two_locations_solution();
    modify(&mut solution.summary);

    assert_eq!(check_solution(solution, 2), Err(vec![expected.to_string()]));
}}

can_detect_inconsistent_totals! {
    case01_trucks: (|summary: &mut Summary| summary.total_trucks = 2, "summary reports 2 trucks, but 1 routes are present"),
    case02_assigned: (|summary: &mut Summary| summary.assigned_resources = 1, "summary reports 1 assigned resources, expected 30"),
    case03_total: (|summary: &mut Summary| summary.total_resources = 1, "summary reports 1 total resources, expected 30"),
    case04_distance: (|summary: &mut Summary| summary.total_distance_meters = 1., "summary reports total distance 1, expected 3000"),
}

#[test]
fn can_tolerate_rounding_of_distances() {
    let mut solution = create_two_locations_solution();
    solution.summary.total_distance_meters += 1E-9;
    solution.routes[0].distance_meters -= 1E-9;

    assert_eq!(check_solution(solution, 1), Ok(()));
}

#[test]
fn can_detect_route_distance_mismatch() {
    let mut solution = create_two_locations_solution();
    solution.routes[0].segments[0].distance_leg = 10.;

    assert_eq!(
        check_solution(solution, 1),
        Err(vec!["route of vehicle 'vehicle_1' reports distance 3000, but its segments sum to 2010".to_string()])
    );
}
