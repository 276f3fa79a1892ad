use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// Plan summary.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Prioritization strategy used.
    pub strategy: String,
    /// Total distance of all routes.
    pub total_distance_meters: f64,
    /// Total requested resources.
    pub total_resources: i64,
    /// Total delivered resources.
    pub assigned_resources: i64,
    /// Amount of used vehicles.
    pub total_trucks: usize,
    /// Allocation path taken: `unconstrained`, `optimized`, `proportional` or `unmodified`.
    pub allocation: String,
}

/// A named point.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Place {
    /// Name.
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

/// A route stop.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Stop {
    /// Location name.
    pub name: String,
    /// Delivered load.
    pub load: i64,
    /// Estimated arrival, seconds since route start.
    pub eta: i64,
}

/// A route leg.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Origin name.
    pub from: String,
    /// Destination name.
    pub to: String,
    /// Transport mode: `road`, `sea` or `air`.
    pub mode: String,
    /// A polyline as `[lon, lat]` pairs.
    pub geometry: Vec<[f64; 2]>,
    /// Leg distance in meters.
    pub distance_leg: f64,
}

/// A vehicle route.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Vehicle id.
    pub vehicle_id: String,
    /// Dominant transport mode.
    pub vehicle_type: String,
    /// Route distance.
    pub distance_meters: f64,
    /// Total delivered load.
    pub load: i64,
    /// Stops, depot excluded.
    pub stops: Vec<Stop>,
    /// Legs including departure from and return to depot.
    pub segments: Vec<Segment>,
}

/// Allocation ledger entry of a location.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct LocationInfo {
    /// Name.
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// Requested needs per category.
    pub needs: BTreeMap<String, i64>,
    /// Total requested amount.
    pub requested: i64,
    /// Allocated amount.
    pub allocated: i64,
}

/// A relief distribution plan in pragmatic format.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Solution {
    /// Always `success` for produced plan.
    pub status: String,
    /// Travel data source: `roadNetwork` or `physics`.
    pub source: String,
    /// Summary.
    pub summary: Summary,
    /// Depot.
    pub depot: Place,
    /// Routes of used vehicles.
    pub routes: Vec<Route>,
    /// Allocation ledger.
    pub locations: Vec<LocationInfo>,
    /// Names of locations dropped by routing.
    #[serde(default)]
    pub unassigned: Vec<String>,
}

/// Serializes solution into json format.
pub fn serialize_solution<W: Write>(writer: BufWriter<W>, solution: &Solution) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, solution).map_err(Error::from)
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
