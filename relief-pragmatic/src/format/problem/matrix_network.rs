#[cfg(test)]
#[path = "../../../tests/unit/format/problem/matrix_network_test.rs"]
mod matrix_network_test;

use super::Matrix;
use relief_core::models::Coordinate;
use relief_core::transport::{RoadMatrix, RoadNetwork};
use relief_core::utils::GenericResult;

/// A road network backed by precomputed routing matrix: depot first, then locations in request order.
/// A pair with non-zero error code has no road route. Geometry is not available.
pub struct MatrixRoadNetwork {
    matrix: Matrix,
}

impl MatrixRoadNetwork {
    /// Creates a new instance of `MatrixRoadNetwork`.
    pub fn new(matrix: Matrix) -> Self {
        Self { matrix }
    }
}

impl RoadNetwork for MatrixRoadNetwork {
    fn matrix(&self, coordinates: &[Coordinate]) -> GenericResult<RoadMatrix> {
        let size = self.matrix.dimension().ok_or_else(|| "routing matrix has inconsistent size".to_string())?;

        if size != coordinates.len() {
            return Err(format!("routing matrix has size {size}, expected {}", coordinates.len()).into());
        }

        let legs = self
            .matrix
            .distances
            .iter()
            .zip(self.matrix.travel_times.iter())
            .enumerate()
            .map(|(idx, (&distance, &duration))| {
                let has_error = self.matrix.error_codes.as_ref().is_some_and(|codes| codes[idx] != 0);
                if has_error { None } else { Some((distance as f64, duration as f64)) }
            })
            .collect();

        RoadMatrix::new(size, legs)
    }

    fn geometry(&self, _: &[Coordinate]) -> Option<Vec<Coordinate>> {
        None
    }
}
