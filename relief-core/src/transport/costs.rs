//! Cost adjuster folds service time and hazard penalties into raw travel times.

#[cfg(test)]
#[path = "../../tests/unit/transport/costs_test.rs"]
mod costs_test;

use super::TravelMatrix;
use crate::geodesy::vincenty_distance;
use crate::models::*;

/// Travel times adjusted by destination service time and hazard penalties, stored row-major.
#[derive(Clone, Debug)]
pub struct AdjustedCosts {
    size: usize,
    times: Vec<Duration>,
    service_times: Vec<Duration>,
    hazardous: Vec<bool>,
}

impl AdjustedCosts {
    /// Returns adjusted time of the leg.
    pub fn time(&self, from: usize, to: usize) -> Duration {
        self.times[from * self.size + to]
    }

    /// Returns service time at the node.
    pub fn service_time(&self, node: usize) -> Duration {
        self.service_times[node]
    }

    /// Returns true if the node lies inside any blocked zone.
    pub fn is_hazardous(&self, node: usize) -> bool {
        self.hazardous[node]
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Returns per node service time: fixed stop overhead plus loading time, zero at depot.
pub fn get_service_times(demands: &[Load], config: &CostConfig) -> Vec<Duration> {
    demands
        .iter()
        .enumerate()
        .map(|(node, &load)| {
            if node == 0 { 0. } else { config.fixed_stop_time + load as f64 * config.loading_time_per_unit }
        })
        .collect()
}

/// Checks whether coordinate is strictly within radius of any blocked zone.
pub fn is_inside_blocked_zone(coordinate: &Coordinate, zones: &[BlockedZone]) -> bool {
    zones.iter().any(|zone| vincenty_distance(coordinate, &zone.center) < zone.radius)
}

/// Adjusts raw durations: a leg ending in a blocked zone is multiplied by hazard multiplier once,
/// no matter how many zones overlap, then destination service time is added. Only the destination
/// is checked, the path between nodes is not. Distances stay untouched.
pub fn adjust_costs(
    matrix: &TravelMatrix,
    coordinates: &[Coordinate],
    demands: &[Load],
    zones: &[BlockedZone],
    config: &CostConfig,
) -> AdjustedCosts {
    let size = matrix.size();
    assert_eq!(coordinates.len(), size);
    assert_eq!(demands.len(), size);

    let service_times = get_service_times(demands, config);
    let hazardous = coordinates.iter().map(|coordinate| is_inside_blocked_zone(coordinate, zones)).collect::<Vec<_>>();

    let times = (0..size)
        .flat_map(|from| (0..size).map(move |to| (from, to)))
        .map(|(from, to)| {
            if from == to {
                return 0.;
            }

            let multiplier = if hazardous[to] { config.hazard_multiplier } else { 1. };

            matrix.duration(from, to) * multiplier + service_times[to]
        })
        .collect();

    AdjustedCosts { size, times, service_times, hazardous }
}
