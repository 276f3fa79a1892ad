use super::*;

#[test]
fn can_create_road_matrix() {
    let matrix = RoadMatrix::new(2, vec![Some((0., 0.)), Some((10., 5.)), None, Some((0., 0.))]).unwrap();

    assert_eq!(matrix.size(), 2);
    assert_eq!(matrix.get(0, 1), Some((10., 5.)));
    assert_eq!(matrix.get(1, 0), None);
}

#[test]
fn can_detect_wrong_amount_of_legs() {
    let result = RoadMatrix::new(2, vec![None; 3]);

    assert_eq!(result.err(), Some("road matrix expects 4 legs, got 3".into()));
}

#[test]
fn can_use_unreachable_network() {
    let network = NoRoadNetwork::default();
    let coordinates = vec![Coordinate::new(0., 0.), Coordinate::new(1., 1.)];

    assert!(network.matrix(&coordinates).is_err());
    assert!(network.geometry(&coordinates).is_none());
}
