use super::*;
use crate::helpers::*;

fn get_code(result: Result<(), FormatError>) -> Option<String> {
    result.err().map(|err| err.code)
}

#[test]
fn can_detect_no_locations() {
    let request = create_request(vec![]);
    let ctx = ValidationContext::new(&request, None);

    assert_eq!(get_code(check_e1001_no_locations(&ctx)), Some("E1001".to_string()));
}

parameterized_test! {can_detect_invalid_location_coordinate, (coordinate, expected), {
    let request = create_request(vec![create_request_location("A", coordinate, &[("water", 1)])]);
    let ctx = ValidationContext::new(&request, None);

    let result = check_e1004_invalid_coordinates(&ctx);

    assert_eq!(get_code(result), expected.map(|code: &str| code.to_string()));
}}

can_detect_invalid_location_coordinate! {
    case01_valid: ((10., 20.), None),
    case02_bounds: ((-90., 180.), None),
    case03_lat_too_big: ((90.5, 20.), Some("E1004")),
    case04_lon_too_small: ((10., -180.5), Some("E1004")),
    case05_nan: ((f64::NAN, 20.), Some("E1004")),
    case06_infinite: ((10., f64::INFINITY), Some("E1004")),
}

#[test]
fn can_detect_invalid_depot_and_zone_coordinates() {
    let request = Request {
        depot: Some(Depot { name: "Hub".to_string(), lat: 100., lon: 0. }),
        blocked_zones: Some(vec![
            BlockedZone { lat: 10., lon: 10., radius: 10. },
            BlockedZone { lat: 10., lon: 200., radius: 10. },
        ]),
        ..create_two_locations_request()
    };
    let ctx = ValidationContext::new(&request, None);

    let result = check_e1004_invalid_coordinates(&ctx);

    let error = result.err().expect("expected error");
    assert_eq!(error.code, "E1004");
    assert!(error.action.contains("'Hub, blocked zone #1'"));
}

#[test]
fn can_detect_duplicated_names() {
    let request = create_request(vec![
        create_request_location("A", (1., 1.), &[]),
        create_request_location("B", (2., 2.), &[]),
        create_request_location("A", (3., 3.), &[]),
    ]);
    let ctx = ValidationContext::new(&request, None);

    let error = check_e1005_duplicated_names(&ctx).err().expect("expected error");

    assert_eq!(error.code, "E1005");
    assert!(error.action.ends_with("'A'"));
}

parameterized_test! {can_detect_negative_needs, (needs, expected), {
    let request = create_request(vec![create_request_location("A", (1., 1.), needs)]);
    let ctx = ValidationContext::new(&request, None);

    assert_eq!(get_code(check_e1006_negative_needs(&ctx)), expected.map(|code: &str| code.to_string()));
}}

can_detect_negative_needs! {
    case01_positive: (&[("water", 1), ("food", 2)], None),
    case02_zero: (&[("water", 0)], None),
    case03_negative: (&[("water", 1), ("food", -2)], Some("E1006")),
}

parameterized_test! {can_detect_too_big_needs, (needs, expected), {
    let request = create_request(vec![create_request_location("A", (10., 20.), needs)]);
    let ctx = ValidationContext::new(&request, None);

    assert_eq!(get_code(check_e1010_need_quantity_too_big(&ctx)), expected.map(|code: &str| code.to_string()));
}}

can_detect_too_big_needs! {
    case01_limit: (&[("water", MAX_QUANTITY)], None),
    case02_above_limit: (&[("water", 1), ("medical", MAX_QUANTITY + 1)], Some("E1010")),
    case03_type_limit: (&[("food", i64::MAX)], Some("E1010")),
}

parameterized_test! {can_detect_invalid_zone_radius, (radius, expected), {
    let request = Request {
        blocked_zones: Some(vec![BlockedZone { lat: 10., lon: 10., radius }]),
        ..create_two_locations_request()
    };
    let ctx = ValidationContext::new(&request, None);

    assert_eq!(get_code(check_e1007_invalid_zone_radius(&ctx)), expected.map(|code: &str| code.to_string()));
}}

can_detect_invalid_zone_radius! {
    case01_positive: (100., None),
    case02_zero: (0., None),
    case03_negative: (-1., Some("E1007")),
    case04_nan: (f64::NAN, Some("E1007")),
}

#[test]
fn can_accept_valid_locations() {
    let request = create_two_locations_request();
    let ctx = ValidationContext::new(&request, None);

    assert!(validate_locations(&ctx).is_ok());
}
