use crate::format::problem::*;
use std::collections::BTreeMap;

pub fn create_request_location(name: &str, (lat, lon): (f64, f64), needs: &[(&str, i64)]) -> Location {
    Location {
        name: name.to_string(),
        lat,
        lon,
        needs: needs.iter().map(|(category, amount)| (category.to_string(), *amount)).collect::<BTreeMap<_, _>>(),
    }
}

pub fn create_request(locations: Vec<Location>) -> Request {
    Request {
        strategy: None,
        depot: None,
        parsed_needs: ParsedNeeds { locations },
        blocked_zones: None,
        vehicle_capacity: Some(100),
        max_fleet_size: Some(2),
        time_limit_seconds: Some(0.1),
    }
}

/// Creates a request with two locations having water needs of 10 and 20.
pub fn create_two_locations_request() -> Request {
    create_request(vec![
        create_request_location("Puri", (19.8135, 85.8312), &[("water", 10)]),
        create_request_location("Cuttack", (20.4625, 85.8830), &[("water", 15), ("food", 5)]),
    ])
}

/// Creates a square matrix with given distances and durations equal to distances divided by 10.
pub fn create_matrix(distances: Vec<i64>) -> Matrix {
    Matrix { travel_times: distances.iter().map(|distance| distance / 10).collect(), distances, error_codes: None }
}
