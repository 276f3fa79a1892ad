use super::*;

#[test]
fn can_calculate_one_degree_at_equator() {
    let distance = vincenty_distance(&Coordinate::new(0., 0.), &Coordinate::new(0., 1.));

    assert_approx!(distance, 111_320., 50.);
}

#[test]
fn can_calculate_reference_distance() {
    // Flinders Peak to Buninyong
    let from = Coordinate::new(-37.951_033_42, 144.424_867_89);
    let to = Coordinate::new(-37.652_821_14, 143.926_495_54);

    assert_approx!(vincenty_distance(&from, &to), 54_972.271, 0.01);
}

#[test]
fn can_return_zero_for_coincident_points() {
    let point = Coordinate::new(20.2444, 85.8172);

    assert_eq!(vincenty_distance(&point, &point), 0.);
}

parameterized_test! {can_handle_near_antipodal_points, (from, to), {
    let distance = vincenty_distance(&Coordinate::new(from.0, from.1), &Coordinate::new(to.0, to.1));

    assert!(distance.is_finite());
}}

can_handle_near_antipodal_points! {
    case01_equator: ((0., 0.), (0., 180.)),
    case02_shifted: ((0., 0.), (0.5, 179.7)),
    case03_poles: ((90., 0.), (-90., 0.)),
}

#[test]
fn can_be_close_to_great_circle_distance() {
    let from = Coordinate::new(20.2444, 85.8172);
    let to = Coordinate::new(19.8135, 85.8312);

    let ellipsoidal = vincenty_distance(&from, &to);
    let spherical = great_circle_distance(&from, &to);

    assert!((ellipsoidal - spherical).abs() / spherical < 0.005);
}
