#[cfg(test)]
#[path = "../../tests/unit/routing/solver_test.rs"]
mod solver_test;

use super::{DimensionKind, RoutingModel};
use crate::utils::{Environment, GenericResult};

/// A route of a single vehicle.
#[derive(Clone, Debug)]
pub struct Tour {
    /// Vehicle index.
    pub vehicle: usize,
    /// Visited nodes from depot to depot.
    pub nodes: Vec<usize>,
    /// Cumulative values per model dimension at each position.
    pub cumuls: Vec<Vec<i64>>,
}

impl Tour {
    /// Returns true if tour does not visit any node besides depot.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 2
    }

    /// Returns cumulative value of the dimension at given position.
    pub fn cumul(&self, dimension: usize, position: usize) -> Option<i64> {
        self.cumuls.get(dimension).and_then(|cumuls| cumuls.get(position)).copied()
    }
}

/// A solution of the routing model.
#[derive(Clone, Debug)]
pub struct Assignment {
    /// Tours, one per vehicle.
    pub tours: Vec<Tour>,
    /// Nodes which are not visited.
    pub dropped: Vec<usize>,
    /// Objective value.
    pub objective: i64,
}

impl Assignment {
    /// Creates an assignment from visit sequences (one per vehicle, depot excluded).
    /// Nodes not present in any sequence are treated as dropped.
    pub fn from_sequences(model: &RoutingModel, sequences: Vec<Vec<usize>>) -> GenericResult<Self> {
        if sequences.len() != model.vehicle_count {
            return Err(format!("expected {} sequences, got {}", model.vehicle_count, sequences.len()).into());
        }

        let mut visited = vec![false; model.node_count];
        visited[model.depot] = true;

        for &node in sequences.iter().flatten() {
            match visited.get_mut(node) {
                Some(is_visited) if !*is_visited => *is_visited = true,
                Some(_) => return Err(format!("node {node} is visited more than once").into()),
                None => return Err(format!("unknown node {node}").into()),
            }
        }

        let dropped: Vec<usize> = (0..model.node_count).filter(|&node| !visited[node]).collect();
        if let Some(node) = dropped.iter().find(|&&node| model.drop_penalties[node].is_none()) {
            return Err(format!("mandatory node {node} is not visited").into());
        }

        let route_costs = sequences
            .iter()
            .enumerate()
            .map(|(vehicle, nodes)| {
                model
                    .route_cost(vehicle, nodes)
                    .ok_or_else(|| format!("route of vehicle {vehicle} is infeasible").into())
            })
            .collect::<GenericResult<Vec<_>>>()?;

        let tours = sequences
            .into_iter()
            .enumerate()
            .map(|(vehicle, nodes)| {
                let nodes: Vec<usize> =
                    std::iter::once(model.depot).chain(nodes).chain(std::iter::once(model.depot)).collect();
                let cumuls = model
                    .get_cumuls(vehicle, &nodes)
                    .ok_or_else(|| format!("route of vehicle {vehicle} is infeasible"))?;

                Ok(Tour { vehicle, nodes, cumuls })
            })
            .collect::<GenericResult<Vec<_>>>()?;

        Ok(Self { tours, objective: model.objective(&route_costs, &dropped), dropped })
    }

    /// Returns cumulative value of the given dimension kind at tour position.
    pub fn cumul(&self, model: &RoutingModel, vehicle: usize, position: usize, kind: DimensionKind) -> Option<i64> {
        let dimension = model.dimension_index(kind)?;
        self.tours.get(vehicle).and_then(|tour| tour.cumul(dimension, position))
    }
}

/// Solves routing models.
pub trait RoutingSolver: Send + Sync {
    /// Returns a solution or `None` if no feasible solution is found.
    fn solve(&self, model: &RoutingModel, environment: &Environment) -> Option<Assignment>;
}
