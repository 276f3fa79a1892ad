//! Mode selection policy expressed as an ordered list of rules.

#[cfg(test)]
#[path = "../../tests/unit/transport/modes_test.rs"]
mod modes_test;

use crate::models::{Distance, Duration, TransportMode};

/// What is known about a leg when its mode is selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoadLeg {
    /// Road network is unreachable as a whole.
    Unavailable,
    /// Road network reports no route for the pair.
    NoRoute,
    /// Road network reports a route.
    Route {
        /// Road distance.
        distance: Distance,
        /// Road duration.
        duration: Duration,
    },
}

/// A rule which assigns a transport mode to a leg when it matches.
#[derive(Clone, Debug, PartialEq)]
pub enum ModeRule {
    /// Flies when great-circle distance exceeds the threshold, regardless of road data.
    AirAbove {
        /// Threshold in meters.
        threshold: Distance,
    },
    /// Sails when road network reports no route.
    SeaWhenNoRoute,
    /// Sails when road distance exceeds `ratio` times great-circle distance.
    SeaWhenDetour {
        /// Detour ratio.
        ratio: f64,
    },
    /// Drives.
    Road,
}

impl ModeRule {
    /// Returns default ranked rules.
    pub fn default_rules(air_threshold: Distance, detour_ratio: f64) -> Vec<ModeRule> {
        vec![
            ModeRule::AirAbove { threshold: air_threshold },
            ModeRule::SeaWhenNoRoute,
            ModeRule::SeaWhenDetour { ratio: detour_ratio },
            ModeRule::Road,
        ]
    }

    /// Returns a mode if the rule matches given leg.
    pub fn apply(&self, geo_distance: Distance, road: &RoadLeg) -> Option<TransportMode> {
        match (self, road) {
            (ModeRule::AirAbove { threshold }, _) if geo_distance > *threshold => Some(TransportMode::Air),
            (ModeRule::SeaWhenNoRoute, RoadLeg::NoRoute) => Some(TransportMode::Sea),
            (ModeRule::SeaWhenDetour { ratio }, RoadLeg::Route { distance, .. })
                if *distance > ratio * geo_distance =>
            {
                Some(TransportMode::Sea)
            }
            (ModeRule::Road, _) => Some(TransportMode::Road),
            _ => None,
        }
    }
}

/// Selects a mode using the first matching rule, road is used when nothing matches.
pub fn select_mode(rules: &[ModeRule], geo_distance: Distance, road: &RoadLeg) -> TransportMode {
    rules.iter().find_map(|rule| rule.apply(geo_distance, road)).unwrap_or(TransportMode::Road)
}
