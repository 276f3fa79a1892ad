use crate::format::solution::*;
use std::collections::BTreeMap;

pub fn create_stop(name: &str, load: i64) -> Stop {
    Stop { name: name.to_string(), load, eta: 0 }
}

pub fn create_segment(from: &str, to: &str, distance: f64) -> Segment {
    Segment {
        from: from.to_string(),
        to: to.to_string(),
        mode: "road".to_string(),
        geometry: vec![],
        distance_leg: distance,
    }
}

/// Creates a route which visits stops in given order with 1000 meters legs.
pub fn create_route(vehicle_id: &str, stops: Vec<Stop>) -> Route {
    let names = std::iter::once("Base")
        .chain(stops.iter().map(|stop| stop.name.as_str()))
        .chain(std::iter::once("Base"))
        .collect::<Vec<_>>();
    let segments = names.windows(2).map(|leg| create_segment(leg[0], leg[1], 1000.)).collect::<Vec<_>>();

    Route {
        vehicle_id: vehicle_id.to_string(),
        vehicle_type: "road".to_string(),
        distance_meters: segments.iter().map(|segment| segment.distance_leg).sum(),
        load: stops.iter().map(|stop| stop.load).sum(),
        stops,
        segments,
    }
}

pub fn create_location_info(name: &str, needs: &[(&str, i64)], allocated: i64) -> LocationInfo {
    let needs = needs.iter().map(|(category, amount)| (category.to_string(), *amount)).collect::<BTreeMap<_, _>>();

    LocationInfo { name: name.to_string(), lat: 0., lon: 0., requested: needs.values().sum(), needs, allocated }
}

/// Creates a solution with consistent summary.
pub fn create_solution_with_routes(
    routes: Vec<Route>,
    locations: Vec<LocationInfo>,
    unassigned: Vec<&str>,
) -> Solution {
    let summary = Summary {
        strategy: "welfare".to_string(),
        total_distance_meters: routes.iter().map(|route| route.distance_meters).sum(),
        total_resources: locations.iter().map(|info| info.requested).sum(),
        assigned_resources: routes.iter().map(|route| route.load).sum(),
        total_trucks: routes.len(),
        allocation: "unconstrained".to_string(),
    };

    Solution {
        status: "success".to_string(),
        source: "physics".to_string(),
        summary,
        depot: Place { name: "Base".to_string(), lat: 20.2444, lon: 85.8172 },
        routes,
        locations,
        unassigned: unassigned.into_iter().map(|name| name.to_string()).collect(),
    }
}

/// Creates a feasible solution for `create_two_locations_request`.
pub fn create_two_locations_solution() -> Solution {
    create_solution_with_routes(
        vec![create_route("vehicle_1", vec![create_stop("Puri", 10), create_stop("Cuttack", 20)])],
        vec![
            create_location_info("Puri", &[("water", 10)], 10),
            create_location_info("Cuttack", &[("water", 15), ("food", 5)], 20),
        ],
        vec![],
    )
}
