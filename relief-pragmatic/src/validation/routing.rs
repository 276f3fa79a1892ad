#[cfg(test)]
#[path = "../../tests/unit/validation/routing_test.rs"]
mod routing_test;

use super::*;
use relief_core::models::Strategy;

/// Checks that routing matrix covers depot and all locations.
fn check_e1008_matrix_size_mismatch(ctx: &ValidationContext) -> Result<(), FormatError> {
    let Some(matrix) = ctx.matrix else { return Ok(()) };

    let expected = ctx.request.locations().len() + 1;

    match matrix.dimension() {
        Some(size) if size == expected => Ok(()),
        actual => Err(FormatError::new(
            "E1008".to_string(),
            "routing matrix size mismatch".to_string(),
            format!(
                "supply square matrix for depot and all locations: expected size {expected}, got {}",
                actual.map_or("inconsistent".to_string(), |size| size.to_string())
            ),
        )),
    }
}

/// Checks that strategy is known.
fn check_e1009_unknown_strategy(ctx: &ValidationContext) -> Result<(), FormatError> {
    match ctx.request.strategy.as_deref().map(|name| name.parse::<Strategy>()) {
        Some(Err(details)) => Err(FormatError::new_with_details(
            "E1009".to_string(),
            "unknown strategy".to_string(),
            "use one of: 'welfare', 'need', 'fastest'".to_string(),
            details,
        )),
        _ => Ok(()),
    }
}

/// Validates routing settings of the request.
pub fn validate_routing(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[check_e1008_matrix_size_mismatch(ctx), check_e1009_unknown_strategy(ctx)])
}
