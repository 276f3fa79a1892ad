//! A road network backed by OSRM `table` and `route` services.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/plan/osrm_test.rs"]
mod osrm_test;

use relief_core::models::Coordinate;
use relief_core::transport::{RoadMatrix, RoadNetwork};
use relief_core::utils::GenericResult;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration as TimeSpan;

const MATRIX_TIMEOUT: TimeSpan = TimeSpan::from_secs(10);
const GEOMETRY_TIMEOUT: TimeSpan = TimeSpan::from_secs(5);

#[derive(Deserialize)]
struct TableResponse {
    code: String,
    distances: Option<Vec<Vec<Option<f64>>>>,
    durations: Option<Vec<Vec<Option<f64>>>>,
}

#[derive(Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// A road network which queries OSRM http api.
pub struct OsrmRoadNetwork {
    base_url: String,
    client: Client,
}

impl OsrmRoadNetwork {
    /// Creates a new instance of `OsrmRoadNetwork`.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), client: Client::new() }
    }

    fn get_url(&self, service: &str, coordinates: &[Coordinate], query: &str) -> String {
        format!("{}/{service}/v1/driving/{}?{query}", self.base_url, format_coordinates(coordinates))
    }
}

impl RoadNetwork for OsrmRoadNetwork {
    fn matrix(&self, coordinates: &[Coordinate]) -> GenericResult<RoadMatrix> {
        let url = self.get_url("table", coordinates, "annotations=distance,duration");

        let response = self
            .client
            .get(url)
            .timeout(MATRIX_TIMEOUT)
            .send()
            .and_then(|response| response.json::<TableResponse>())
            .map_err(|err| format!("osrm table request failed: '{err}'"))?;

        create_road_matrix(response, coordinates.len())
    }

    fn geometry(&self, coordinates: &[Coordinate]) -> Option<Vec<Coordinate>> {
        if coordinates.len() < 2 {
            return None;
        }

        let url = self.get_url("route", coordinates, "overview=full&geometries=geojson");

        let response = self
            .client
            .get(url)
            .timeout(GEOMETRY_TIMEOUT)
            .send()
            .and_then(|response| response.json::<RouteResponse>())
            .ok()?;

        create_geometry(response)
    }
}

/// Formats coordinates as `lon,lat` pairs separated by semicolon.
fn format_coordinates(coordinates: &[Coordinate]) -> String {
    coordinates
        .iter()
        .map(|coordinate| format!("{},{}", coordinate.lng, coordinate.lat))
        .collect::<Vec<_>>()
        .join(";")
}

fn create_road_matrix(response: TableResponse, size: usize) -> GenericResult<RoadMatrix> {
    if response.code != "Ok" {
        return Err(format!("osrm table service returned code '{}'", response.code).into());
    }

    let (Some(distances), Some(durations)) = (response.distances, response.durations) else {
        return Err("osrm table response has no distances or durations".into());
    };

    let is_square = |rows: &[Vec<Option<f64>>]| rows.len() == size && rows.iter().all(|row| row.len() == size);
    if !is_square(distances.as_slice()) || !is_square(durations.as_slice()) {
        return Err(format!("osrm table response is not a {size}x{size} matrix").into());
    }

    let legs = distances
        .iter()
        .flatten()
        .zip(durations.iter().flatten())
        .map(|(distance, duration)| distance.zip(*duration))
        .collect();

    RoadMatrix::new(size, legs)
}

fn create_geometry(response: RouteResponse) -> Option<Vec<Coordinate>> {
    if response.code != "Ok" {
        return None;
    }

    let route = response.routes.into_iter().next()?;

    Some(route.geometry.coordinates.into_iter().map(|[lng, lat]| Coordinate::new(lat, lng)).collect())
}
