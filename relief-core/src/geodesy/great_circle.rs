#[cfg(test)]
#[path = "../../tests/unit/geodesy/great_circle_test.rs"]
mod great_circle_test;

use crate::models::{Coordinate, Distance};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: Distance = 6_371_000.;

/// Gets distance between two points using haversine formula on a sphere.
pub fn great_circle_distance(from: &Coordinate, to: &Coordinate) -> Distance {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.).sin().powi(2) + (d_lng / 2.).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).max(0.).sqrt());

    EARTH_RADIUS * c
}
