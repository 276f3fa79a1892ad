#[cfg(test)]
#[path = "../../tests/unit/allocation/priorities_test.rs"]
mod priorities_test;

use crate::geodesy::great_circle_distance;
use crate::models::*;
use crate::utils::compare_floats;

/// Returns a priority score per location according to problem's strategy: higher is served first.
/// Scores saturate at `i64::MAX`.
pub fn get_priorities(problem: &ReliefProblem) -> Vec<i64> {
    match problem.strategy {
        Strategy::Welfare => problem
            .locations
            .iter()
            .map(|location| {
                location
                    .need(MEDICAL_CATEGORY)
                    .saturating_mul(10)
                    .saturating_add(location.need(WATER_CATEGORY).saturating_mul(3))
                    .saturating_add(1)
            })
            .collect(),
        Strategy::Need => problem.locations.iter().map(|location| location.total_demand().saturating_add(1)).collect(),
        Strategy::Fastest => get_proximity_ranks(problem),
    }
}

/// The nearest location gets the highest rank equal to the amount of locations.
fn get_proximity_ranks(problem: &ReliefProblem) -> Vec<i64> {
    let depot = &problem.depot.coordinate;
    let distances = problem
        .locations
        .iter()
        .map(|location| great_circle_distance(depot, &location.coordinate))
        .collect::<Vec<_>>();

    let mut order = (0..distances.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| compare_floats(distances[a], distances[b]));

    let total = distances.len() as i64;
    let mut ranks = vec![0; distances.len()];
    order.into_iter().enumerate().for_each(|(position, idx)| ranks[idx] = total - position as i64);

    ranks
}
