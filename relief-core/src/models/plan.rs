//! Plan representation produced by the planning pipeline.

use crate::models::common::*;
use std::fmt;

/// A transport mode of a leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportMode {
    /// Travel by road.
    Road,
    /// Travel by sea.
    Sea,
    /// Travel by air.
    Air,
}

impl TransportMode {
    /// All modes in their preference order.
    pub const ALL: [TransportMode; 3] = [TransportMode::Road, TransportMode::Sea, TransportMode::Air];

    /// Returns mode name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Sea => "sea",
            Self::Air => "air",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Specifies where travel data came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixSource {
    /// Road network supplied distances and durations.
    RoadNetwork,
    /// Road network was unavailable, physics-only estimations were used.
    Physics,
}

/// Specifies which path the equity allocator has taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// Total demand fits fleet capacity.
    Unconstrained,
    /// Linear program was solved.
    Optimized,
    /// Equity floors do not fit capacity, proportional split was used.
    Proportional,
    /// LP solver has failed, raw demand is returned and capacity cap is not guaranteed.
    Unmodified,
}

/// A stop on the route.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    /// Node index (1-based for locations).
    pub node: usize,
    /// Allocated load delivered at the stop.
    pub load: Load,
    /// Estimated cumulative arrival time, seconds since route start.
    pub eta: i64,
}

/// A leg between two consecutive nodes of the route.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Origin node.
    pub from: usize,
    /// Destination node.
    pub to: usize,
    /// Transport mode.
    pub mode: TransportMode,
    /// Display geometry.
    pub geometry: Vec<Coordinate>,
    /// Leg distance.
    pub distance: Distance,
}

/// A route of a single vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Vehicle id.
    pub vehicle_id: String,
    /// Dominant transport mode of the route.
    pub vehicle_type: TransportMode,
    /// Stops, depot excluded.
    pub stops: Vec<Stop>,
    /// Segments, including departure from and return to the depot.
    pub segments: Vec<Segment>,
    /// Total load.
    pub load: Load,
    /// Total distance.
    pub distance: Distance,
}

/// Allocation information of a single location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationAllocation {
    /// Location index (0-based, depot excluded).
    pub location: usize,
    /// Requested amount.
    pub requested: Load,
    /// Allocated amount.
    pub allocated: Load,
}

/// A relief distribution plan.
#[derive(Clone, Debug)]
pub struct Plan {
    /// Vehicle routes, vehicles without stops are omitted.
    pub routes: Vec<Route>,
    /// Allocation ledger.
    pub allocations: Vec<LocationAllocation>,
    /// Allocation path taken.
    pub allocation_outcome: AllocationOutcome,
    /// Locations (0-based, depot excluded) dropped by the routing solver.
    pub unassigned: Vec<usize>,
    /// Source of travel data.
    pub source: MatrixSource,
}

impl Plan {
    /// Returns total distance of all routes.
    pub fn total_distance(&self) -> Distance {
        self.routes.iter().map(|route| route.distance).sum()
    }

    /// Returns total delivered load.
    pub fn assigned_resources(&self) -> Load {
        self.routes.iter().map(|route| route.load).fold(0, Load::saturating_add)
    }

    /// Returns total requested resources.
    pub fn total_resources(&self) -> Load {
        self.allocations.iter().map(|allocation| allocation.requested).fold(0, Load::saturating_add)
    }
}
