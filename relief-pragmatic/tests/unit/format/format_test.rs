use super::*;
use relief_core::utils::GenericError;

#[test]
fn can_display_format_error() {
    let error = FormatError::new("E1001".to_string(), "no locations supplied".to_string(), "add some".to_string());

    assert_eq!(error.to_string(), "E1001, cause: 'no locations supplied', action: 'add some'.");
}

#[test]
fn can_serialize_format_error_without_details() {
    let error = FormatError::new("E0000".to_string(), "cause".to_string(), "action".to_string());

    let json = error.to_json();

    assert!(json.contains("\"code\": \"E0000\""));
    assert!(!json.contains("details"));
}

#[test]
fn can_display_multiple_errors_line_by_line() {
    let error = MultiFormatError::from(vec![
        FormatError::new("E1001".to_string(), "a".to_string(), "b".to_string()),
        FormatError::new("E1002".to_string(), "c".to_string(), "d".to_string()),
    ]);

    assert_eq!(error.to_string(), "E1001, cause: 'a', action: 'b'.\nE1002, cause: 'c', action: 'd'.");
    assert!(error.to_json().starts_with('['));
}

parameterized_test! {can_map_planning_error, (error, expected_code, has_details), {
    let result = map_planning_error(&error);

    assert_eq!(result.code, expected_code);
    assert_eq!(result.details.is_some(), has_details);
}}

can_map_planning_error! {
    case01_no_solution: (PlanningError::NoSolution, "E2001", false),
    case02_invalid_input: (PlanningError::InvalidInput("no locations supplied".to_string()), "E2002", true),
    case03_failure: (PlanningError::Failure(GenericError::from("model is broken")), "E2002", true),
}
