#[cfg(test)]
#[path = "../../tests/unit/transport/network_test.rs"]
mod network_test;

use crate::models::{Coordinate, Distance, Duration};
use crate::utils::GenericResult;

/// Pairwise road travel data: `None` marks a pair without a road route.
#[derive(Clone, Debug)]
pub struct RoadMatrix {
    size: usize,
    legs: Vec<Option<(Distance, Duration)>>,
}

impl RoadMatrix {
    /// Creates a new instance of `RoadMatrix` from row-major flattened legs.
    pub fn new(size: usize, legs: Vec<Option<(Distance, Duration)>>) -> GenericResult<Self> {
        if legs.len() != size * size {
            return Err(format!("road matrix expects {} legs, got {}", size * size, legs.len()).into());
        }

        Ok(Self { size, legs })
    }

    /// Returns matrix size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns road distance and duration from `from` to `to` if road route exists.
    pub fn get(&self, from: usize, to: usize) -> Option<(Distance, Duration)> {
        self.legs[from * self.size + to]
    }
}

/// Provides road travel data and display geometry.
pub trait RoadNetwork: Send + Sync {
    /// Returns road matrix for given coordinates or an error when the network is unreachable.
    fn matrix(&self, coordinates: &[Coordinate]) -> GenericResult<RoadMatrix>;

    /// Returns road geometry along ordered coordinates, `None` if geometry cannot be fetched.
    fn geometry(&self, coordinates: &[Coordinate]) -> Option<Vec<Coordinate>>;
}

/// A road network which is never reachable: planning degrades to physics-only estimations.
#[derive(Default)]
pub struct NoRoadNetwork {}

impl RoadNetwork for NoRoadNetwork {
    fn matrix(&self, _: &[Coordinate]) -> GenericResult<RoadMatrix> {
        Err("road network is not configured".into())
    }

    fn geometry(&self, _: &[Coordinate]) -> Option<Vec<Coordinate>> {
        None
    }
}
