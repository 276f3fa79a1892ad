//! Multimodal matrix builder: decides road, sea or air per ordered node pair.

#[cfg(test)]
#[path = "../../tests/unit/transport/matrix_test.rs"]
mod matrix_test;

use super::*;
use crate::geodesy::{great_circle_distance, vincenty_distance};
use crate::models::*;
use crate::utils::{Environment, GenericResult, parallel_collect_indexed};

/// Distance, duration and mode for every ordered node pair, stored row-major.
#[derive(Clone, Debug)]
pub struct TravelMatrix {
    size: usize,
    distances: Vec<Distance>,
    durations: Vec<Duration>,
    modes: Vec<TransportMode>,
    source: MatrixSource,
}

impl TravelMatrix {
    /// Creates a new instance of `TravelMatrix` from row-major flattened data.
    pub fn new(
        size: usize,
        distances: Vec<Distance>,
        durations: Vec<Duration>,
        modes: Vec<TransportMode>,
        source: MatrixSource,
    ) -> GenericResult<Self> {
        let expected = size * size;
        if distances.len() != expected || durations.len() != expected || modes.len() != expected {
            return Err(format!("travel matrix expects {expected} values per collection").into());
        }

        Ok(Self { size, distances, durations, modes, source })
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns leg distance.
    pub fn distance(&self, from: usize, to: usize) -> Distance {
        self.distances[from * self.size + to]
    }

    /// Returns raw leg duration.
    pub fn duration(&self, from: usize, to: usize) -> Duration {
        self.durations[from * self.size + to]
    }

    /// Returns leg transport mode.
    pub fn mode(&self, from: usize, to: usize) -> TransportMode {
        self.modes[from * self.size + to]
    }

    /// Returns travel data source.
    pub fn source(&self) -> MatrixSource {
        self.source
    }

    /// Returns true if any leg uses air or sea transport.
    pub fn has_long_haul(&self) -> bool {
        self.modes.iter().any(|mode| *mode != TransportMode::Road)
    }
}

/// Builds a complete travel matrix. Never fails: a missing road route falls back per pair and an
/// unreachable road network degrades the whole matrix to physics-only estimations.
pub fn build_travel_matrix(
    coordinates: &[Coordinate],
    network: &dyn RoadNetwork,
    config: &TransportConfig,
    environment: &Environment,
) -> TravelMatrix {
    let size = coordinates.len();

    let road_matrix = match network.matrix(coordinates) {
        Ok(matrix) if matrix.size() == size => Some(matrix),
        Ok(matrix) => {
            environment.log(&format!(
                "road network returned matrix of size {} for {size} coordinates, use physics fallback",
                matrix.size()
            ));
            None
        }
        Err(err) => {
            environment.log(&format!("road network is unavailable: '{err}', use physics fallback"));
            None
        }
    };

    let source = if road_matrix.is_some() { MatrixSource::RoadNetwork } else { MatrixSource::Physics };

    if let Some(matrix) = road_matrix.as_ref() {
        let no_route = (0..size)
            .flat_map(|from| (0..size).map(move |to| (from, to)))
            .filter(|&(from, to)| from != to && get_road_leg(matrix, from, to) == RoadLeg::NoRoute)
            .count();

        if no_route > 0 {
            environment.log(&format!("road network has no route for {no_route} pairs, use per pair fallback"));
        }
    }

    let rows = parallel_collect_indexed(size, |from| {
        (0..size)
            .map(|to| {
                if from == to {
                    return (0., 0., TransportMode::Road);
                }

                let road =
                    road_matrix.as_ref().map_or(RoadLeg::Unavailable, |matrix| get_road_leg(matrix, from, to));

                estimate_leg(&coordinates[from], &coordinates[to], &road, config)
            })
            .collect::<Vec<_>>()
    });

    let mut distances = Vec::with_capacity(size * size);
    let mut durations = Vec::with_capacity(size * size);
    let mut modes = Vec::with_capacity(size * size);

    rows.into_iter().flatten().for_each(|(distance, duration, mode)| {
        distances.push(distance);
        durations.push(duration);
        modes.push(mode);
    });

    let count = |target: TransportMode| {
        (0..size * size).filter(|&idx| idx / size != idx % size && modes[idx] == target).count()
    };
    environment.log(&format!(
        "travel matrix of {size} nodes is built from {source:?}: road={}, sea={}, air={}",
        count(TransportMode::Road),
        count(TransportMode::Sea),
        count(TransportMode::Air)
    ));

    TravelMatrix { size, distances, durations, modes, source }
}

/// Returns a road leg, invalid values are treated as a missing route.
fn get_road_leg(matrix: &RoadMatrix, from: usize, to: usize) -> RoadLeg {
    match matrix.get(from, to) {
        Some((distance, duration))
            if distance.is_finite() && duration.is_finite() && distance >= 0. && duration >= 0. =>
        {
            RoadLeg::Route { distance, duration }
        }
        _ => RoadLeg::NoRoute,
    }
}

/// Estimates distance, duration and mode of a single leg.
pub fn estimate_leg(
    from: &Coordinate,
    to: &Coordinate,
    road: &RoadLeg,
    config: &TransportConfig,
) -> (Distance, Duration, TransportMode) {
    let geo = great_circle_distance(from, to);

    match (select_mode(&config.mode_rules, geo, road), road) {
        (TransportMode::Air, _) => (geo, geo / config.air_speed + config.docking_time, TransportMode::Air),
        (TransportMode::Sea, _) => (geo, geo / config.sea_speed, TransportMode::Sea),
        (TransportMode::Road, RoadLeg::Route { distance, duration }) => (*distance, *duration, TransportMode::Road),
        (TransportMode::Road, _) => {
            let distance = vincenty_distance(from, to);
            (distance, distance / config.road_speed, TransportMode::Road)
        }
    }
}
