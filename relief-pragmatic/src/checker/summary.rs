#[cfg(test)]
#[path = "../../tests/unit/checker/summary_test.rs"]
mod summary_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks that summary and route totals are consistent.
pub fn check_summary(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_fleet_usage(context), check_totals(context), check_route_distances(context)])
}

fn check_fleet_usage(context: &CheckerContext) -> Result<(), String> {
    let summary = &context.solution.summary;
    let used = context.solution.routes.len();

    if summary.total_trucks != used {
        return Err(format!("summary reports {} trucks, but {used} routes are present", summary.total_trucks));
    }

    let fleet_size = context.request.fleet_size().max(0) as usize;
    if used > fleet_size {
        return Err(format!("{used} routes are present, but fleet has only {fleet_size} vehicles"));
    }

    let mut vehicles = HashSet::new();
    context.solution.routes.iter().try_for_each(|route| {
        if vehicles.insert(route.vehicle_id.as_str()) {
            Ok(())
        } else {
            Err(format!("vehicle '{}' is used more than once", route.vehicle_id))
        }
    })
}

fn check_totals(context: &CheckerContext) -> Result<(), String> {
    let summary = &context.solution.summary;

    let assigned = context.solution.routes.iter().map(|route| route.load).sum::<i64>();
    if summary.assigned_resources != assigned {
        return Err(format!("summary reports {} assigned resources, expected {assigned}", summary.assigned_resources));
    }

    let total = context.solution.locations.iter().map(|info| info.requested).sum::<i64>();
    if summary.total_resources != total {
        return Err(format!("summary reports {} total resources, expected {total}", summary.total_resources));
    }

    let distance = context.solution.routes.iter().map(|route| route.distance_meters).sum::<f64>();
    if !is_same_distance(summary.total_distance_meters, distance) {
        return Err(format!("summary reports total distance {}, expected {distance}", summary.total_distance_meters));
    }

    Ok(())
}

fn check_route_distances(context: &CheckerContext) -> Result<(), String> {
    context.solution.routes.iter().try_for_each(|route| {
        let distance = route.segments.iter().map(|segment| segment.distance_leg).sum::<f64>();

        if is_same_distance(route.distance_meters, distance) {
            Ok(())
        } else {
            Err(format!(
                "route of vehicle '{}' reports distance {}, but its segments sum to {distance}",
                route.vehicle_id, route.distance_meters
            ))
        }
    })
}
