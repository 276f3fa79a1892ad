#[cfg(test)]
#[path = "../../tests/unit/checker/assignment_test.rs"]
mod assignment_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks assignment of locations. The following rules are checked:
/// * every stop refers to a known location and locations are visited at most once
/// * stop load matches allocated amount which does not exceed requested amount
/// * unassigned locations are not visited
pub fn check_assignment(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_visits(context), check_allocations(context), check_unassigned(context)])
}

fn check_visits(context: &CheckerContext) -> Result<(), String> {
    let mut visited = HashSet::new();

    context.solution.routes.iter().flat_map(|route| route.stops.iter()).try_for_each(|stop| {
        context.get_location(stop.name.as_str())?;

        if visited.insert(stop.name.as_str()) {
            Ok(())
        } else {
            Err(format!("location '{}' is visited more than once", stop.name))
        }
    })
}

fn check_allocations(context: &CheckerContext) -> Result<(), String> {
    context.solution.locations.iter().try_for_each(|info| {
        let location = context.get_location(info.name.as_str())?;
        let requested = location.needs.values().sum::<i64>();

        if info.requested != requested {
            return Err(format!("location '{}' has requested {}, expected {requested}", info.name, info.requested));
        }

        if info.allocated < 0 || info.allocated > requested {
            return Err(format!("location '{}' has allocated {} out of {requested}", info.name, info.allocated));
        }

        let delivered = context
            .solution
            .routes
            .iter()
            .flat_map(|route| route.stops.iter())
            .find(|stop| stop.name == info.name)
            .map(|stop| stop.load);

        match delivered {
            Some(load) if load != info.allocated => Err(format!(
                "location '{}' receives {load}, but {} is allocated",
                info.name, info.allocated
            )),
            _ => Ok(()),
        }
    })
}

fn check_unassigned(context: &CheckerContext) -> Result<(), String> {
    let visited = context
        .solution
        .routes
        .iter()
        .flat_map(|route| route.stops.iter())
        .map(|stop| &stop.name)
        .collect::<HashSet<_>>();

    context.solution.unassigned.iter().try_for_each(|name| {
        context.get_location(name.as_str())?;

        if visited.contains(name) {
            Err(format!("location '{name}' is unassigned, but visited"))
        } else {
            Ok(())
        }
    })
}
