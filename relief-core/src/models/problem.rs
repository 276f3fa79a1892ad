//! Problem definition: depot, demand locations, hazards and fleet.

#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::common::*;
use std::collections::BTreeMap;
use std::time::Duration as TimeSpan;

/// A mapping from need category (water, food, medical, ...) to required quantity.
pub type Needs = BTreeMap<String, Load>;

/// Need category which carries the highest weight in welfare strategy.
pub const MEDICAL_CATEGORY: &str = "medical";

/// Need category which carries the second highest weight in welfare strategy.
pub const WATER_CATEGORY: &str = "water";

/// A demand location.
#[derive(Clone, Debug)]
pub struct Location {
    /// A unique location name.
    pub name: String,
    /// Location coordinate.
    pub coordinate: Coordinate,
    /// Requested quantities per need category.
    pub needs: Needs,
}

impl Location {
    /// Creates a new instance of `Location`.
    pub fn new(name: &str, coordinate: Coordinate, needs: Needs) -> Self {
        Self { name: name.to_string(), coordinate, needs }
    }

    /// Returns total requested quantity over all need categories, saturating at `Load::MAX`.
    pub fn total_demand(&self) -> Load {
        self.needs.values().copied().fold(0, Load::saturating_add)
    }

    /// Returns requested quantity of the given category or zero.
    pub fn need(&self, category: &str) -> Load {
        self.needs.get(category).copied().unwrap_or(0)
    }
}

/// A depot: a distinguished point without demand, always node 0.
#[derive(Clone, Debug)]
pub struct Depot {
    /// Depot name.
    pub name: String,
    /// Depot coordinate.
    pub coordinate: Coordinate,
}

/// A hazard which inflates time cost of any leg ending inside it.
#[derive(Clone, Debug)]
pub struct BlockedZone {
    /// Zone center.
    pub center: Coordinate,
    /// Zone radius in meters.
    pub radius: Distance,
}

/// A delivery vehicle.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// Vehicle id.
    pub id: String,
    /// Vehicle capacity.
    pub capacity: Load,
}

/// An ordered collection of vehicles.
#[derive(Clone, Debug)]
pub struct Fleet {
    /// Vehicles.
    pub vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Creates a fleet of `size` vehicles with the same `capacity`.
    pub fn homogeneous(size: usize, capacity: Load) -> Self {
        Self {
            vehicles: (0..size).map(|idx| Vehicle { id: format!("vehicle_{}", idx + 1), capacity }).collect(),
        }
    }

    /// Returns total capacity of the fleet, saturating at `Load::MAX`.
    pub fn total_capacity(&self) -> Load {
        self.vehicles.iter().map(|vehicle| vehicle.capacity).fold(0, Load::saturating_add)
    }

    /// Returns amount of vehicles.
    pub fn size(&self) -> usize {
        self.vehicles.len()
    }
}

/// Specifies how location priorities are derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Medical and water needs dominate.
    #[default]
    Welfare,
    /// Bigger total need dominates.
    Need,
    /// Closer locations dominate.
    Fastest,
}

impl Strategy {
    /// Returns strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welfare => "welfare",
            Self::Need => "need",
            Self::Fastest => "fastest",
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "welfare" => Ok(Self::Welfare),
            "need" => Ok(Self::Need),
            "fastest" => Ok(Self::Fastest),
            _ => Err(format!("unknown strategy: '{value}'")),
        }
    }
}

/// A relief distribution problem.
#[derive(Clone, Debug)]
pub struct ReliefProblem {
    /// A prioritization strategy.
    pub strategy: Strategy,
    /// A depot where all vehicles start and end.
    pub depot: Depot,
    /// Demand locations.
    pub locations: Vec<Location>,
    /// Hazard zones.
    pub blocked_zones: Vec<BlockedZone>,
    /// Available fleet.
    pub fleet: Fleet,
    /// Overrides routing search time limit.
    pub time_limit: Option<TimeSpan>,
}

impl ReliefProblem {
    /// Returns coordinates of all nodes: depot first, then locations in their order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        std::iter::once(self.depot.coordinate).chain(self.locations.iter().map(|loc| loc.coordinate)).collect()
    }

    /// Returns raw demands of locations, depot excluded.
    pub fn raw_demands(&self) -> Vec<Load> {
        self.locations.iter().map(|location| location.total_demand()).collect()
    }

    /// Returns amount of nodes including depot.
    pub fn node_count(&self) -> usize {
        self.locations.len() + 1
    }

    /// Returns a name of the node with given index.
    pub fn node_name(&self, node: usize) -> &str {
        if node == 0 { self.depot.name.as_str() } else { self.locations[node - 1].name.as_str() }
    }

    /// Checks that the problem is plannable at all.
    pub fn validate(&self) -> Result<(), String> {
        if self.locations.is_empty() {
            return Err("no locations supplied".to_string());
        }

        if self.fleet.vehicles.is_empty() {
            return Err("fleet has no vehicles".to_string());
        }

        if let Some(vehicle) = self.fleet.vehicles.iter().find(|vehicle| vehicle.capacity <= 0) {
            return Err(format!("vehicle '{}' has non-positive capacity", vehicle.id));
        }

        Ok(())
    }
}
