#[cfg(test)]
#[path = "../../tests/unit/geodesy/vincenty_test.rs"]
mod vincenty_test;

use super::great_circle_distance;
use crate::models::{Coordinate, Distance};

/// WGS-84 semi-major axis in meters.
const WGS84_A: f64 = 6_378_137.;
/// WGS-84 flattening.
const WGS84_F: f64 = 1. / 298.257_223_563;

const MAX_ITERATIONS: usize = 100;
const CONVERGENCE_THRESHOLD: f64 = 1e-12;
const NEAR_ZERO: f64 = 1e-15;

/// Gets distance between two points using iterative Vincenty inverse formula on WGS-84 ellipsoid.
///
/// Returns zero for coincident points. Near-antipodal points may not converge within the iteration
/// budget: the last estimate is used then, and if it is not finite, great-circle distance is returned.
pub fn vincenty_distance(from: &Coordinate, to: &Coordinate) -> Distance {
    let b = (1. - WGS84_F) * WGS84_A;

    let u1 = ((1. - WGS84_F) * from.lat.to_radians().tan()).atan();
    let u2 = ((1. - WGS84_F) * to.lat.to_radians().tan()).atan();
    let l = (to.lng - from.lng).to_radians();

    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let (mut sin_sigma, mut cos_sigma, mut sigma) = (0., 0., 0.);
    let (mut cos_sq_alpha, mut cos2_sigma_m) = (0., 0.);

    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        sin_sigma = ((cos_u2 * sin_lambda).powi(2) + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2)).sqrt();
        if sin_sigma == 0. {
            return 0.;
        }

        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1. - sin_alpha * sin_alpha;

        // equatorial line: the correction term is undefined
        cos2_sigma_m =
            if cos_sq_alpha.abs() < NEAR_ZERO { 0. } else { cos_sigma - 2. * sin_u1 * sin_u2 / cos_sq_alpha };

        let c = WGS84_F / 16. * cos_sq_alpha * (4. + WGS84_F * (4. - 3. * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1. - c)
                * WGS84_F
                * sin_alpha
                * (sigma + c * sin_sigma * (cos2_sigma_m + c * cos_sigma * (-1. + 2. * cos2_sigma_m.powi(2))));

        if (lambda - lambda_prev).abs() < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    let u_sq = cos_sq_alpha * (WGS84_A.powi(2) - b.powi(2)) / b.powi(2);
    let a_coef = 1. + u_sq / 16384. * (4096. + u_sq * (-768. + u_sq * (320. - 175. * u_sq)));
    let b_coef = u_sq / 1024. * (256. + u_sq * (-128. + u_sq * (74. - 47. * u_sq)));

    let delta_sigma = b_coef
        * sin_sigma
        * (cos2_sigma_m
            + b_coef / 4.
                * (cos_sigma * (-1. + 2. * cos2_sigma_m.powi(2))
                    - b_coef / 6. * cos2_sigma_m * (-3. + 4. * sin_sigma.powi(2)) * (-3. + 4. * cos2_sigma_m.powi(2))));

    let distance = b * a_coef * (sigma - delta_sigma);

    if distance.is_finite() { distance } else { great_circle_distance(from, to) }
}
