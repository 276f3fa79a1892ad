#[cfg(test)]
#[path = "../../tests/unit/validation/locations_test.rs"]
mod locations_test;

use super::*;
use crate::utils::get_duplicates;

/// Checks that at least one location is specified.
fn check_e1001_no_locations(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.request.locations().is_empty() {
        Err(FormatError::new(
            "E1001".to_string(),
            "no locations supplied".to_string(),
            "specify at least one location in parsed needs".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that depot, locations and blocked zones have valid coordinates.
fn check_e1004_invalid_coordinates(ctx: &ValidationContext) -> Result<(), FormatError> {
    let depot = ctx.request.depot();

    let names = std::iter::once((depot.name.as_str(), depot.lat, depot.lon))
        .chain(ctx.locations().map(|location| (location.name.as_str(), location.lat, location.lon)))
        .filter(|(_, lat, lon)| !is_valid_coordinate(*lat, *lon))
        .map(|(name, _, _)| name.to_string())
        .chain(
            ctx.request
                .blocked_zones
                .iter()
                .flatten()
                .enumerate()
                .filter(|(_, zone)| !is_valid_coordinate(zone.lat, zone.lon))
                .map(|(idx, _)| format!("blocked zone #{idx}")),
        )
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1004".to_string(),
            "invalid coordinate".to_string(),
            format!("use latitude in [-90, 90] and longitude in [-180, 180] for: '{}'", names.join(", ")),
        ))
    }
}

/// Checks that location names are unique.
fn check_e1005_duplicated_names(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.locations().map(|location| &location.name)).map_or(Ok(()), |names| {
        Err(FormatError::new(
            "E1005".to_string(),
            "duplicated location names".to_string(),
            format!("remove duplicates of locations with the names: '{}'", names.join(", ")),
        ))
    })
}

/// Checks that need quantities are not negative.
fn check_e1006_negative_needs(ctx: &ValidationContext) -> Result<(), FormatError> {
    let names = ctx
        .locations()
        .filter(|location| location.needs.values().any(|quantity| *quantity < 0))
        .map(|location| location.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1006".to_string(),
            "negative need quantity".to_string(),
            format!("use non-negative need quantities for locations: '{}'", names.join(", ")),
        ))
    }
}

/// Checks that blocked zone radius is a finite non-negative number.
fn check_e1007_invalid_zone_radius(ctx: &ValidationContext) -> Result<(), FormatError> {
    let indices = ctx
        .request
        .blocked_zones
        .iter()
        .flatten()
        .enumerate()
        .filter(|(_, zone)| !zone.radius.is_finite() || zone.radius < 0.)
        .map(|(idx, _)| idx.to_string())
        .collect::<Vec<_>>();

    if indices.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1007".to_string(),
            "invalid blocked zone radius".to_string(),
            format!("use non-negative radius for blocked zones with indices: '{}'", indices.join(", ")),
        ))
    }
}

/// Checks that need quantities do not exceed supported limit.
fn check_e1010_need_quantity_too_big(ctx: &ValidationContext) -> Result<(), FormatError> {
    let names = ctx
        .locations()
        .filter(|location| location.needs.values().any(|quantity| *quantity > MAX_QUANTITY))
        .map(|location| location.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1010".to_string(),
            "need quantity is too big".to_string(),
            format!("use need quantities not greater than {MAX_QUANTITY} for locations: '{}'", names.join(", ")),
        ))
    }
}

/// Validates locations, depot and blocked zones of the request.
pub fn validate_locations(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1001_no_locations(ctx),
        check_e1004_invalid_coordinates(ctx),
        check_e1005_duplicated_names(ctx),
        check_e1006_negative_needs(ctx),
        check_e1007_invalid_zone_radius(ctx),
        check_e1010_need_quantity_too_big(ctx),
    ])
}
