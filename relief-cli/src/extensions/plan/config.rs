//! Planning configuration which overrides defaults.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/plan/config_test.rs"]
mod config_test;

extern crate serde_json;

use relief_core::models::{Limit, PlanningConfig, TransportConfig};
use relief_core::transport::ModeRule;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::time::Duration as TimeSpan;

/// A planning configuration: every omitted field keeps its default value.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies equity allocation settings.
    pub allocation: Option<AllocationConfig>,
    /// Specifies multimodal transport settings.
    pub transport: Option<TransportSettings>,
    /// Specifies travel cost adjustments.
    pub costs: Option<CostSettings>,
    /// Specifies routing model and search settings.
    pub routing: Option<RoutingSettings>,
    /// Specifies road network settings.
    pub network: Option<NetworkConfig>,
}

/// An equity allocation configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AllocationConfig {
    /// A minimum served fraction of a location demand, default is 0.2.
    pub equity_floor: Option<f64>,
}

/// A transport configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransportSettings {
    /// Great-circle distance in meters above which air is used, default is 600 km.
    pub air_threshold: Option<f64>,
    /// Ratio of road to great-circle distance which signals water obstacle, default is 3.
    pub detour_ratio: Option<f64>,
    /// Air speed in m/s.
    pub air_speed: Option<f64>,
    /// Docking time of air legs in seconds.
    pub docking_time: Option<f64>,
    /// Sea speed in m/s.
    pub sea_speed: Option<f64>,
    /// Road speed in m/s used without road network.
    pub road_speed: Option<f64>,
}

/// A cost adjustment configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CostSettings {
    /// Fixed stop time in seconds.
    pub fixed_stop_time: Option<f64>,
    /// Loading time per unit in seconds.
    pub loading_time_per_unit: Option<f64>,
    /// Multiplier of legs ending inside blocked zone.
    pub hazard_multiplier: Option<f64>,
}

/// A ceiling for road only and multimodal plans.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LimitConfig {
    /// Road only ceiling.
    pub regular: i64,
    /// Multimodal ceiling.
    pub long_haul: i64,
}

/// A routing configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RoutingSettings {
    /// Waiting time allowed at a node in seconds.
    pub time_slack: Option<i64>,
    /// Shift time ceilings in seconds.
    pub shift_time: Option<LimitConfig>,
    /// Vehicle distance ceilings in meters.
    pub vehicle_distance: Option<LimitConfig>,
    /// Span cost coefficient of time dimension.
    pub span_cost_coefficient: Option<i64>,
    /// A penalty of a dropped location.
    pub drop_penalty: Option<i64>,
    /// Search time limit in seconds.
    pub time_limit: Option<f64>,
    /// Max amount of search iterations.
    pub iteration_limit: Option<usize>,
}

/// A road network configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// A base url of OSRM service.
    pub osrm_url: Option<String>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates planning configuration overlaying config values on defaults.
pub fn create_planning_config(config: &Config) -> Result<PlanningConfig, String> {
    let mut planning = PlanningConfig::default();

    if let Some(allocation) = &config.allocation {
        if let Some(equity_floor) = allocation.equity_floor {
            if !(0. ..=1.).contains(&equity_floor) {
                return Err(format!("equity floor should be in [0, 1] range, got: {equity_floor}"));
            }
            planning.allocation.equity_floor = equity_floor;
        }
    }

    if let Some(transport) = &config.transport {
        configure_transport(&mut planning.transport, transport)?;
    }

    if let Some(costs) = &config.costs {
        let target = &mut planning.costs;
        target.fixed_stop_time = get_non_negative(costs.fixed_stop_time, target.fixed_stop_time, "fixedStopTime")?;
        target.loading_time_per_unit =
            get_non_negative(costs.loading_time_per_unit, target.loading_time_per_unit, "loadingTimePerUnit")?;
        target.hazard_multiplier =
            get_non_negative(costs.hazard_multiplier, target.hazard_multiplier, "hazardMultiplier")?;
    }

    if let Some(routing) = &config.routing {
        let target = &mut planning.routing;
        target.time_slack = routing.time_slack.unwrap_or(target.time_slack);
        target.shift_time = routing.shift_time.as_ref().map_or(target.shift_time, to_limit);
        target.vehicle_distance = routing.vehicle_distance.as_ref().map_or(target.vehicle_distance, to_limit);
        target.span_cost_coefficient = routing.span_cost_coefficient.unwrap_or(target.span_cost_coefficient);
        target.drop_penalty = routing.drop_penalty.unwrap_or(target.drop_penalty);
        target.iteration_limit = routing.iteration_limit.or(target.iteration_limit);

        if let Some(time_limit) = routing.time_limit {
            target.time_limit = TimeSpan::try_from_secs_f64(time_limit)
                .map_err(|err| format!("invalid time limit: {time_limit}, error: '{err}'"))?;
        }
    }

    Ok(planning)
}

fn configure_transport(target: &mut TransportConfig, transport: &TransportSettings) -> Result<(), String> {
    target.air_speed = get_positive(transport.air_speed, target.air_speed, "airSpeed")?;
    target.sea_speed = get_positive(transport.sea_speed, target.sea_speed, "seaSpeed")?;
    target.road_speed = get_positive(transport.road_speed, target.road_speed, "roadSpeed")?;
    target.docking_time = get_non_negative(transport.docking_time, target.docking_time, "dockingTime")?;

    if transport.air_threshold.is_some() || transport.detour_ratio.is_some() {
        let air_threshold = get_positive(transport.air_threshold, TransportConfig::AIR_THRESHOLD, "airThreshold")?;
        let detour_ratio = get_positive(transport.detour_ratio, TransportConfig::DETOUR_RATIO, "detourRatio")?;

        target.mode_rules = ModeRule::default_rules(air_threshold, detour_ratio);
    }

    Ok(())
}

fn get_positive(value: Option<f64>, default: f64, name: &str) -> Result<f64, String> {
    match value {
        Some(value) if !(value.is_finite() && value > 0.) => Err(format!("{name} should be positive, got: {value}")),
        Some(value) => Ok(value),
        None => Ok(default),
    }
}

fn get_non_negative(value: Option<f64>, default: f64, name: &str) -> Result<f64, String> {
    match value {
        Some(value) if !(value.is_finite() && value >= 0.) => {
            Err(format!("{name} should be non-negative, got: {value}"))
        }
        Some(value) => Ok(value),
        None => Ok(default),
    }
}

fn to_limit(limit: &LimitConfig) -> Limit {
    Limit { regular: limit.regular, long_haul: limit.long_haul }
}
