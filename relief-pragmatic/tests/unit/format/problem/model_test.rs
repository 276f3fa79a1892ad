use super::*;

fn read_request(json: &str) -> Result<Request, MultiFormatError> {
    deserialize_request(BufReader::new(json.as_bytes()))
}

#[test]
fn can_deserialize_request_in_camel_case() {
    let request = read_request(
        r#"{
          "strategy": "fastest",
          "depot": { "name": "Hub", "lat": 10.0, "lon": 20.0 },
          "parsedNeeds": { "locations": [ { "name": "A", "lat": 1.0, "lon": 2.0, "needs": { "water": 5, "food": 3 } } ] },
          "blockedZones": [ { "lat": 1.0, "lon": 2.0, "radius": 500.0 } ],
          "vehicleCapacity": 10,
          "maxFleetSize": 4,
          "timeLimitSeconds": 2.5
        }"#,
    )
    .expect("cannot read request");

    assert_eq!(request.strategy.as_deref(), Some("fastest"));
    assert_eq!(request.depot().name, "Hub");
    assert_eq!(request.locations().len(), 1);
    assert_eq!(request.locations()[0].needs.get("food"), Some(&3));
    assert_eq!(request.blocked_zones.as_ref().map(|zones| zones.len()), Some(1));
    assert_eq!(request.vehicle_capacity(), 10);
    assert_eq!(request.fleet_size(), 4);
    assert_eq!(request.time_limit_seconds, Some(2.5));
}

#[test]
fn can_deserialize_request_in_snake_case() {
    let request = read_request(
        r#"{
          "parsedNeeds": { "locations": [ { "name": "A", "lat": 1.0, "lng": 2.0 } ] },
          "blocked_zones": [ { "lat": 1.0, "lng": 2.0, "radius": 100.0 } ],
          "vehicle_capacity": 7,
          "max_fleet_size": 1,
          "time_limit_seconds": 1.0
        }"#,
    )
    .expect("cannot read request");

    assert_eq!(request.locations()[0].lon, 2.);
    assert!(request.locations()[0].needs.is_empty());
    assert_eq!(request.blocked_zones.as_ref().map(|zones| zones[0].lon), Some(2.));
    assert_eq!(request.vehicle_capacity(), 7);
    assert_eq!(request.fleet_size(), 1);
}

#[test]
fn can_use_defaults_for_omitted_fields() {
    let request = read_request(r#"{ "parsedNeeds": { "locations": [] } }"#).expect("cannot read request");

    assert_eq!(request.depot(), Depot { name: "Base".to_string(), lat: 20.2444, lon: 85.8172 });
    assert_eq!(request.vehicle_capacity(), DEFAULT_VEHICLE_CAPACITY);
    assert_eq!(request.fleet_size(), DEFAULT_FLEET_SIZE);
    assert!(request.strategy.is_none());
}

#[test]
fn can_use_default_depot_name() {
    let request = read_request(r#"{ "depot": { "lat": 1.0, "lon": 2.0 } }"#).expect("cannot read request");

    assert_eq!(request.depot().name, "Base");
}

#[test]
fn can_return_e0000_for_broken_request() {
    let result = read_request("{ \"parsedNeeds\": ");

    assert_eq!(result.err().map(|err| err.errors[0].code.clone()), Some("E0000".to_string()));
}

#[test]
fn can_deserialize_matrix_with_durations_alias() {
    let matrix = deserialize_matrix(BufReader::new(r#"{ "durations": [0, 1, 1, 0], "distances": [0, 10, 10, 0] }"#.as_bytes()))
        .expect("cannot read matrix");

    assert_eq!(matrix.travel_times, vec![0, 1, 1, 0]);
    assert_eq!(matrix.dimension(), Some(2));
}

#[test]
fn can_return_e0001_for_broken_matrix() {
    let result = deserialize_matrix(BufReader::new(r#"{ "distances": [0] }"#.as_bytes()));

    assert_eq!(result.err().map(|err| err.errors[0].code.clone()), Some("E0001".to_string()));
}

parameterized_test! {can_get_matrix_dimension, (times, distances, error_codes, expected), {
    let matrix = Matrix { travel_times: times, distances, error_codes };

    assert_eq!(matrix.dimension(), expected);
}}

can_get_matrix_dimension! {
    case01_square: (vec![0; 9], vec![0; 9], None, Some(3)),
    case02_not_square: (vec![0; 8], vec![0; 8], None, None),
    case03_different_lengths: (vec![0; 4], vec![0; 9], None, None),
    case04_codes_mismatch: (vec![0; 4], vec![0; 4], Some(vec![0; 3]), None),
    case05_codes_match: (vec![0; 4], vec![0; 4], Some(vec![0; 4]), Some(2)),
}

#[test]
fn can_serialize_request_back() {
    let request = Request { strategy: Some("need".to_string()), vehicle_capacity: Some(3), ..Request::default() };
    let mut buffer = Vec::new();

    serialize_request(&request, &mut BufWriter::new(&mut buffer)).expect("cannot serialize");

    let read = read_request(std::str::from_utf8(&buffer).expect("not utf8")).expect("cannot read");
    assert_eq!(read, request);
}
