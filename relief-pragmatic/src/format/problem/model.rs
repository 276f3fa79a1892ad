#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

extern crate serde_json;

use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter, Error, Read, Write};

// region Request

/// A depot where all vehicles start and end their routes.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
pub struct Depot {
    /// Depot name.
    #[serde(default = "default_depot_name")]
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    #[serde(alias = "lng")]
    pub lon: f64,
}

impl Default for Depot {
    fn default() -> Self {
        Self { name: default_depot_name(), lat: 20.2444, lon: 85.8172 }
    }
}

/// A demand location.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
pub struct Location {
    /// A unique location name.
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    #[serde(alias = "lng")]
    pub lon: f64,
    /// Requested quantities per need category (water, food, medical, ...).
    #[serde(default)]
    pub needs: BTreeMap<String, i64>,
}

/// Locations extracted from crisis reports.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq, Default)]
pub struct ParsedNeeds {
    /// Demand locations.
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// A hazard zone: legs ending inside it are heavily penalized.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
pub struct BlockedZone {
    /// Latitude of zone center.
    pub lat: f64,
    /// Longitude of zone center.
    #[serde(alias = "lng")]
    pub lon: f64,
    /// Zone radius in meters.
    pub radius: f64,
}

/// A relief distribution planning request.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Prioritization strategy: `welfare`, `need` or `fastest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    /// A depot, defaults to "Base".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depot: Option<Depot>,

    /// Demand locations.
    #[serde(default)]
    pub parsed_needs: ParsedNeeds,

    /// Hazard zones.
    #[serde(alias = "blocked_zones", skip_serializing_if = "Option::is_none")]
    pub blocked_zones: Option<Vec<BlockedZone>>,

    /// Capacity of each vehicle, default is 5000.
    #[serde(alias = "vehicle_capacity", skip_serializing_if = "Option::is_none")]
    pub vehicle_capacity: Option<i64>,

    /// Amount of vehicles, default is 3.
    #[serde(alias = "max_fleet_size", skip_serializing_if = "Option::is_none")]
    pub max_fleet_size: Option<i64>,

    /// Routing search time limit in seconds.
    #[serde(alias = "time_limit_seconds", skip_serializing_if = "Option::is_none")]
    pub time_limit_seconds: Option<f64>,
}

/// Default vehicle capacity.
pub const DEFAULT_VEHICLE_CAPACITY: i64 = 5000;

/// Default fleet size.
pub const DEFAULT_FLEET_SIZE: i64 = 3;

/// Max supported need quantity or vehicle capacity.
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Max supported fleet size.
pub const MAX_FLEET_SIZE: i64 = 1000;

impl Request {
    /// Returns demand locations.
    pub fn locations(&self) -> &[Location] {
        self.parsed_needs.locations.as_slice()
    }

    /// Returns depot or the default one.
    pub fn depot(&self) -> Depot {
        self.depot.clone().unwrap_or_default()
    }

    /// Returns vehicle capacity or the default one.
    pub fn vehicle_capacity(&self) -> i64 {
        self.vehicle_capacity.unwrap_or(DEFAULT_VEHICLE_CAPACITY)
    }

    /// Returns fleet size or the default one.
    pub fn fleet_size(&self) -> i64 {
        self.max_fleet_size.unwrap_or(DEFAULT_FLEET_SIZE)
    }
}

fn default_depot_name() -> String {
    "Base".to_string()
}

// endregion

// region Routing matrix

/// A routing matrix for depot followed by locations in request order.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Matrix {
    /// Travel durations in seconds.
    #[serde(alias = "durations")]
    pub travel_times: Vec<i64>,

    /// Travel distances in meters.
    pub distances: Vec<i64>,

    /// Error codes to mark pairs without road route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_codes: Option<Vec<i64>>,
}

impl Matrix {
    /// Returns matrix dimension if amount of values is a perfect square.
    pub fn dimension(&self) -> Option<usize> {
        let size = (self.distances.len() as f64).sqrt().round() as usize;
        let is_consistent = size * size == self.distances.len()
            && self.travel_times.len() == self.distances.len()
            && self.error_codes.as_ref().is_none_or(|codes| codes.len() == self.distances.len());

        if is_consistent { Some(size) } else { None }
    }
}

// endregion

/// Deserializes request in json format from `BufReader`.
pub fn deserialize_request<R: Read>(reader: BufReader<R>) -> Result<Request, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0000".to_string(),
            "cannot deserialize request".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

/// Deserializes routing matrix in json format from `BufReader`.
pub fn deserialize_matrix<R: Read>(reader: BufReader<R>) -> Result<Matrix, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0001".to_string(),
            "cannot deserialize matrix".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

/// Serializes `request` in json to `writer`.
pub fn serialize_request<W: Write>(request: &Request, writer: &mut BufWriter<W>) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, request).map_err(Error::from)
}
