//! Contains functionality to configure planning and run it on pragmatic input.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/plan/plan_test.rs"]
mod plan_test;

pub mod config;

#[cfg(feature = "osrm")]
pub mod osrm;

use self::config::{Config, create_planning_config};
use relief_core::prelude::*;
use relief_pragmatic::format::map_planning_error;
use relief_pragmatic::format::problem::{Matrix, PragmaticProblem, Request};
use relief_pragmatic::format::solution::{Solution, create_solution};
use std::sync::Arc;

/// Plans relief distribution for pragmatic request. Errors are returned serialized in json.
pub fn plan_pragmatic(
    request: Request,
    matrix: Option<Matrix>,
    config: &Config,
    environment: Arc<Environment>,
) -> Result<Solution, String> {
    let input = (request, matrix).read_pragmatic().map_err(|errors| errors.to_json())?;
    let planning_config = create_planning_config(config)?;

    let road_network = match input.road_network {
        Some(road_network) => Some(road_network),
        None => create_osrm_network(config, environment.as_ref()),
    };

    let planner = Planner::new(Arc::new(planning_config), environment);
    let planner = match road_network {
        Some(road_network) => planner.with_road_network(road_network),
        None => planner,
    };

    let plan = planner.plan(&input.problem).map_err(|err| map_planning_error(&err).to_json())?;

    Ok(create_solution(&input.problem, &plan))
}

#[cfg(feature = "osrm")]
fn create_osrm_network(config: &Config, environment: &Environment) -> Option<Arc<dyn RoadNetwork>> {
    config.network.as_ref().and_then(|network| network.osrm_url.as_ref()).map(|url| {
        environment.log(&format!("using osrm road network at '{url}'"));
        Arc::new(osrm::OsrmRoadNetwork::new(url)) as Arc<dyn RoadNetwork>
    })
}

#[cfg(not(feature = "osrm"))]
fn create_osrm_network(config: &Config, environment: &Environment) -> Option<Arc<dyn RoadNetwork>> {
    if config.network.as_ref().is_some_and(|network| network.osrm_url.is_some()) {
        environment.log("osrm url is ignored: the binary is built without 'osrm' feature");
    }

    None
}
