#[cfg(test)]
#[path = "../../tests/unit/validation/fleet_test.rs"]
mod fleet_test;

use super::*;

/// Checks that vehicle capacity is positive.
fn check_e1002_non_positive_capacity(ctx: &ValidationContext) -> Result<(), FormatError> {
    let capacity = ctx.request.vehicle_capacity();

    if capacity <= 0 {
        Err(FormatError::new(
            "E1002".to_string(),
            "non-positive vehicle capacity".to_string(),
            format!("specify vehicle capacity greater than zero, got: '{capacity}'"),
        ))
    } else {
        Ok(())
    }
}

/// Checks that fleet has at least one vehicle.
fn check_e1003_non_positive_fleet_size(ctx: &ValidationContext) -> Result<(), FormatError> {
    let size = ctx.request.fleet_size();

    if size <= 0 {
        Err(FormatError::new(
            "E1003".to_string(),
            "non-positive fleet size".to_string(),
            format!("specify fleet size greater than zero, got: '{size}'"),
        ))
    } else {
        Ok(())
    }
}

/// Checks that vehicle capacity does not exceed supported limit.
fn check_e1011_capacity_too_big(ctx: &ValidationContext) -> Result<(), FormatError> {
    let capacity = ctx.request.vehicle_capacity();

    if capacity > MAX_QUANTITY {
        Err(FormatError::new(
            "E1011".to_string(),
            "vehicle capacity is too big".to_string(),
            format!("specify vehicle capacity not greater than {MAX_QUANTITY}, got: '{capacity}'"),
        ))
    } else {
        Ok(())
    }
}

/// Checks that fleet size does not exceed supported limit.
fn check_e1012_fleet_size_too_big(ctx: &ValidationContext) -> Result<(), FormatError> {
    let size = ctx.request.fleet_size();

    if size > MAX_FLEET_SIZE {
        Err(FormatError::new(
            "E1012".to_string(),
            "fleet size is too big".to_string(),
            format!("specify fleet size not greater than {MAX_FLEET_SIZE}, got: '{size}'"),
        ))
    } else {
        Ok(())
    }
}

/// Validates fleet settings of the request.
pub fn validate_fleet(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1002_non_positive_capacity(ctx),
        check_e1003_non_positive_fleet_size(ctx),
        check_e1011_capacity_too_big(ctx),
        check_e1012_fleet_size_too_big(ctx),
    ])
}
