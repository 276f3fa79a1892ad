use super::*;
use crate::helpers::*;

parameterized_test! {can_check_vehicle_capacity, (capacity, expected), {
    let request = Request { vehicle_capacity: Some(capacity), ..create_two_locations_request() };
    let context = CheckerContext::new(request, create_two_locations_solution());

    assert_eq!(check_vehicle_capacity(&context), expected.map_err(|err: &str| err.to_string()));
}}

can_check_vehicle_capacity! {
    case01_enough: (30, Ok(())),
    case02_exceeded: (29, Err("load 30 of vehicle 'vehicle_1' exceeds its capacity 29")),
}

#[test]
fn can_detect_route_load_mismatch() {
    let mut solution = create_two_locations_solution();
    solution.routes[0].load = 25;

    let context = CheckerContext::new(create_two_locations_request(), solution);

    assert_eq!(
        check_vehicle_load(&context),
        Err(vec!["load 25 of vehicle 'vehicle_1' differs from sum of stop loads 30".to_string()])
    );
}
