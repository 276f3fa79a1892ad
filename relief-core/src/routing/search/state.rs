use crate::routing::{RouteCost, RoutingModel};

/// A mutable solution used during search.
#[derive(Clone, Debug)]
pub(crate) struct SearchState {
    pub routes: Vec<Vec<usize>>,
    pub costs: Vec<RouteCost>,
    pub dropped: Vec<usize>,
    pub objective: i64,
}

impl SearchState {
    /// Creates a state or returns `None` when any route is infeasible or mandatory node is dropped.
    pub fn new(model: &RoutingModel, routes: Vec<Vec<usize>>, dropped: Vec<usize>) -> Option<Self> {
        if dropped.iter().any(|&node| model.drop_penalties[node].is_none()) {
            return None;
        }

        let costs = routes
            .iter()
            .enumerate()
            .map(|(vehicle, nodes)| model.route_cost(vehicle, nodes))
            .collect::<Option<Vec<_>>>()?;

        let objective = model.objective(&costs, &dropped);

        Some(Self { routes, costs, dropped, objective })
    }

    /// Returns sum of penalties of dropped nodes.
    pub fn drop_cost(&self, model: &RoutingModel) -> i64 {
        self.dropped.iter().filter_map(|&node| model.drop_penalties[node]).fold(0, i64::saturating_add)
    }
}
