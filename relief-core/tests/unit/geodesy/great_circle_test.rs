use super::*;

parameterized_test! {can_calculate_great_circle_distance, (from, to, expected), {
    let distance = great_circle_distance(&Coordinate::new(from.0, from.1), &Coordinate::new(to.0, to.1));

    assert_approx!(distance, expected, 1.);
}}

can_calculate_great_circle_distance! {
    case01_same_point: ((20.2444, 85.8172), (20.2444, 85.8172), 0.),
    case02_one_degree_lng_equator: ((0., 0.), (0., 1.), 111_194.93),
    case03_one_degree_lat: ((10., 20.), (11., 20.), 111_194.93),
    case04_half_globe: ((0., 0.), (0., 180.), 20_015_086.8),
}

#[test]
fn can_get_symmetric_distance() {
    let a = Coordinate::new(20.2444, 85.8172);
    let b = Coordinate::new(19.8135, 85.8312);

    assert_eq!(great_circle_distance(&a, &b), great_circle_distance(&b, &a));
}
