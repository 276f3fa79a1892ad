use super::*;
use crate::helpers::models::*;

fn create_model() -> RoutingModel {
    create_routing_model(create_line_times(&[10, 20, 30]), vec![0, 2, 3, 4], 2, 7, 100)
}

#[test]
fn can_create_assignment_from_sequences() {
    let model = create_model();

    let assignment = Assignment::from_sequences(&model, vec![vec![1, 2], vec![]]).unwrap();

    assert_eq!(assignment.tours.len(), 2);
    assert_eq!(assignment.tours[0].nodes, vec![0, 1, 2, 0]);
    assert_eq!(assignment.tours[1].nodes, vec![0, 0]);
    assert!(!assignment.tours[0].is_empty());
    assert!(assignment.tours[1].is_empty());
    assert_eq!(assignment.dropped, vec![3]);
    assert_eq!(assignment.objective, 40 + 10 * 40 + 1_000_000);
}

#[test]
fn can_get_cumuls_of_assignment() {
    let model = create_model();

    let assignment = Assignment::from_sequences(&model, vec![vec![2], vec![1, 3]]).unwrap();

    assert_eq!(assignment.cumul(&model, 1, 1, DimensionKind::Time), Some(10));
    assert_eq!(assignment.cumul(&model, 1, 2, DimensionKind::Time), Some(30));
    assert_eq!(assignment.cumul(&model, 1, 3, DimensionKind::Capacity), Some(6));
    assert_eq!(assignment.cumul(&model, 1, 4, DimensionKind::Time), None);
    assert_eq!(assignment.cumul(&model, 2, 0, DimensionKind::Time), None);
}

parameterized_test! {can_reject_invalid_sequences, (sequences, expected), {
    let model = create_model();

    let result = Assignment::from_sequences(&model, sequences);

    assert_eq!(result.err(), Some(expected.into()));
}}

can_reject_invalid_sequences! {
    case01_wrong_vehicle_count: (vec![vec![1]], "expected 2 sequences, got 1"),
    case02_duplicate: (vec![vec![1], vec![1]], "node 1 is visited more than once"),
    case03_depot: (vec![vec![0], vec![]], "node 0 is visited more than once"),
    case04_unknown: (vec![vec![7], vec![]], "unknown node 7"),
    case05_capacity: (vec![vec![1, 2, 3], vec![]], "route of vehicle 0 is infeasible"),
}

#[test]
fn can_reject_missing_mandatory_node() {
    let mut model = create_model();
    model.drop_penalties[3] = None;

    let result = Assignment::from_sequences(&model, vec![vec![1], vec![2]]);

    assert_eq!(result.err(), Some("mandatory node 3 is not visited".into()));
}
