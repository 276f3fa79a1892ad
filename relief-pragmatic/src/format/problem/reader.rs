use super::*;
use crate::validation::ValidationContext;
use relief_core::models::{
    BlockedZone as CoreBlockedZone, Coordinate, Depot as CoreDepot, Fleet, Location as CoreLocation, Strategy,
};
use std::time::Duration as TimeSpan;

pub(super) fn map_to_problem(request: Request, matrix: Option<Matrix>) -> Result<PragmaticInput, MultiFormatError> {
    ValidationContext::new(&request, matrix.as_ref()).validate()?;

    // NOTE strategy is validated above
    let strategy = request.strategy.as_deref().and_then(|name| name.parse::<Strategy>().ok()).unwrap_or_default();

    let depot = request.depot();
    let depot = CoreDepot { name: depot.name, coordinate: Coordinate::new(depot.lat, depot.lon) };

    let locations = request
        .locations()
        .iter()
        .map(|location| {
            let coordinate = Coordinate::new(location.lat, location.lon);
            CoreLocation::new(location.name.as_str(), coordinate, location.needs.clone())
        })
        .collect();

    let blocked_zones = request
        .blocked_zones
        .iter()
        .flatten()
        .map(|zone| CoreBlockedZone { center: Coordinate::new(zone.lat, zone.lon), radius: zone.radius })
        .collect();

    let fleet = Fleet::homogeneous(request.fleet_size() as usize, request.vehicle_capacity());

    let time_limit = request
        .time_limit_seconds
        .filter(|seconds| *seconds > 0.)
        .and_then(|seconds| TimeSpan::try_from_secs_f64(seconds).ok());

    let road_network = matrix.map(|matrix| Arc::new(MatrixRoadNetwork::new(matrix)) as Arc<dyn RoadNetwork>);

    Ok(PragmaticInput {
        problem: ReliefProblem { strategy, depot, locations, blocked_zones, fleet, time_limit },
        road_network,
    })
}
