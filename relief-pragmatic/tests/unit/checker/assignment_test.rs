use super::*;
use crate::helpers::*;

fn check_solution(solution: Solution) -> Result<(), Vec<String>> {
    check_assignment(&CheckerContext::new(create_two_locations_request(), solution))
}

#[test]
fn can_detect_unknown_stop() {
    let mut solution = create_two_locations_solution();
    solution.routes[0].stops.push(create_stop("Atlantis", 0));

    assert_eq!(check_solution(solution), Err(vec!["cannot find location with name 'Atlantis'".to_string()]));
}

#[test]
fn can_detect_repeated_visit() {
    let solution = create_solution_with_routes(
        vec![
            create_route("vehicle_1", vec![create_stop("Puri", 10), create_stop("Cuttack", 20)]),
            create_route("vehicle_2", vec![create_stop("Cuttack", 20)]),
        ],
        create_two_locations_solution().locations,
        vec![],
    );

    let result = check_visits(&CheckerContext::new(create_two_locations_request(), solution));

    assert_eq!(result, Err("location 'Cuttack' is visited more than once".to_string()));
}

parameterized_test! {can_check_allocations, (requested, allocated, delivered, expected), {
    let solution = create_solution_with_routes(
        vec![create_route("vehicle_1", vec![create_stop("Puri", delivered)])],
        vec![LocationInfo { requested, ..create_location_info("Puri", &[("water", 10)], allocated) }],
        vec![],
    );

    let result = check_allocations(&CheckerContext::new(create_two_locations_request(), solution));

    assert_eq!(result, expected.map_err(|err: &str| err.to_string()));
}}

can_check_allocations! {
    case01_full: (10, 10, 10, Ok(())),
    case02_partial: (10, 4, 4, Ok(())),
    case03_wrong_requested: (11, 10, 10, Err("location 'Puri' has requested 11, expected 10")),
    case04_over_allocated: (10, 11, 11, Err("location 'Puri' has allocated 11 out of 10")),
    case05_wrong_delivery: (10, 4, 5, Err("location 'Puri' receives 5, but 4 is allocated")),
}

#[test]
fn can_detect_visited_unassigned_location() {
    let mut solution = create_two_locations_solution();
    solution.unassigned = vec!["Puri".to_string()];

    assert_eq!(check_solution(solution), Err(vec!["location 'Puri' is unassigned, but visited".to_string()]));
}

#[test]
fn can_accept_not_visited_unassigned_location() {
    let solution = create_solution_with_routes(
        vec![create_route("vehicle_1", vec![create_stop("Puri", 10)])],
        create_two_locations_solution().locations,
        vec!["Cuttack"],
    );

    assert_eq!(check_solution(solution), Ok(()));
}
