use super::SearchState;
use crate::routing::RoutingModel;

/// Builds routes one vehicle at a time, always extending the route with the unvisited node
/// reachable by the cheapest feasible arc. Nodes left after all vehicles are used are dropped.
pub(crate) fn build_path_cheapest_arc(model: &RoutingModel) -> Option<SearchState> {
    let mut unvisited: Vec<usize> = (0..model.node_count).filter(|&node| node != model.depot).collect();
    let mut routes = Vec::with_capacity(model.vehicle_count);

    for vehicle in 0..model.vehicle_count {
        let mut route: Vec<usize> = Vec::new();

        loop {
            let last = route.last().copied().unwrap_or(model.depot);

            let mut candidates: Vec<(usize, i64)> =
                unvisited.iter().enumerate().map(|(idx, &node)| (idx, model.arc_cost(last, node))).collect();
            candidates.sort_by_key(|&(idx, cost)| (cost, unvisited[idx]));

            let next = candidates.into_iter().map(|(idx, _)| idx).find(|&idx| {
                route.push(unvisited[idx]);
                let is_feasible = model.route_cost(vehicle, &route).is_some();
                route.pop();
                is_feasible
            });

            match next {
                Some(idx) => route.push(unvisited.remove(idx)),
                None => break,
            }
        }

        routes.push(route);
    }

    SearchState::new(model, routes, unvisited)
}
