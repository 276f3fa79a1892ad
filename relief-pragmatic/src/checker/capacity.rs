#[cfg(test)]
#[path = "../../tests/unit/checker/capacity_test.rs"]
mod capacity_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks that vehicle load is assigned correctly. The following rules are checked:
/// * vehicle capacity is not violated
/// * route load is equal to the sum of stop loads
pub fn check_vehicle_load(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_vehicle_capacity(context), check_route_load(context)])
}

fn check_vehicle_capacity(context: &CheckerContext) -> Result<(), String> {
    let capacity = context.request.vehicle_capacity();

    context.solution.routes.iter().try_for_each(|route| {
        if route.load > capacity {
            Err(format!("load {} of vehicle '{}' exceeds its capacity {capacity}", route.load, route.vehicle_id))
        } else {
            Ok(())
        }
    })
}

fn check_route_load(context: &CheckerContext) -> Result<(), String> {
    context.solution.routes.iter().try_for_each(|route| {
        let total = route.stops.iter().map(|stop| stop.load).sum::<i64>();

        if total != route.load {
            Err(format!("load {} of vehicle '{}' differs from sum of stop loads {total}", route.load, route.vehicle_id))
        } else {
            Ok(())
        }
    })
}
