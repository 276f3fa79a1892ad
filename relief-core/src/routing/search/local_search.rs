use super::SearchState;
use crate::routing::RoutingModel;
use crate::utils::Timer;
use rustc_hash::FxHashMap;

/// Keeps guided local search penalties of arcs.
#[derive(Default)]
pub(crate) struct ArcPenalties {
    counts: FxHashMap<(usize, usize), i64>,
    lambda: i64,
}

impl ArcPenalties {
    /// Returns augmented objective of the given route set.
    fn augment(&self, model: &RoutingModel, objective: i64, routes: &[&[usize]]) -> i64 {
        if self.lambda == 0 || self.counts.is_empty() {
            return objective;
        }

        let penalty: i64 = routes
            .iter()
            .map(|nodes| get_arcs(model, nodes).map(|arc| self.counts.get(&arc).copied().unwrap_or(0)).sum::<i64>())
            .sum();

        objective.saturating_add(self.lambda.saturating_mul(penalty))
    }

    /// Penalizes arcs with max utility in the current local optimum. Returns false if there is nothing to penalize.
    pub fn penalize(&mut self, model: &RoutingModel, state: &SearchState, alpha: f64) -> bool {
        let arcs: Vec<(usize, usize)> = state
            .routes
            .iter()
            .filter(|nodes| !nodes.is_empty())
            .flat_map(|nodes| get_arcs(model, nodes).collect::<Vec<_>>())
            .collect();

        if arcs.is_empty() {
            return false;
        }

        if self.lambda == 0 {
            let base = (state.objective - state.drop_cost(model)).max(0) as f64;
            self.lambda = ((alpha * base / arcs.len() as f64) as i64).max(1);
        }

        let utility = |arc: &(usize, usize)| {
            model.arc_cost(arc.0, arc.1) as f64 / (1 + self.counts.get(arc).copied().unwrap_or(0)) as f64
        };

        let max_utility = arcs.iter().map(utility).fold(f64::MIN, f64::max);
        let selected: Vec<_> = arcs.iter().filter(|arc| utility(arc) >= max_utility).copied().collect();

        selected.into_iter().for_each(|arc| *self.counts.entry(arc).or_insert(0) += 1);

        true
    }
}

/// Applies improving moves until a local optimum of augmented objective is reached or time is over.
pub(crate) fn descend(model: &RoutingModel, state: &mut SearchState, penalties: &ArcPenalties, timer: &Timer) {
    let operators: &[fn(&mut MoveContext) -> bool] =
        &[insert_dropped, relocate, exchange, two_opt, replace_dropped, drop_node];

    loop {
        if timer.is_expired(model.search.time_limit) {
            break;
        }

        let mut ctx = MoveContext { model, state: &mut *state, penalties, timer };
        if !operators.iter().any(|operator| operator(&mut ctx)) {
            break;
        }
    }
}

struct MoveContext<'a> {
    model: &'a RoutingModel,
    state: &'a mut SearchState,
    penalties: &'a ArcPenalties,
    timer: &'a Timer,
}

impl MoveContext<'_> {
    fn is_expired(&self) -> bool {
        self.timer.is_expired(self.model.search.time_limit)
    }

    fn current(&self) -> i64 {
        let routes: Vec<&[usize]> = self.state.routes.iter().map(|nodes| nodes.as_slice()).collect();
        self.penalties.augment(self.model, self.state.objective, &routes)
    }

    /// Applies changed routes if they are feasible and improve augmented objective.
    fn try_apply(&mut self, changes: Vec<(usize, Vec<usize>)>, dropped: Option<Vec<usize>>) -> bool {
        let mut costs = self.state.costs.clone();
        for (vehicle, nodes) in changes.iter() {
            match self.model.route_cost(*vehicle, nodes) {
                Some(cost) => costs[*vehicle] = cost,
                None => return false,
            }
        }

        let dropped_ref = dropped.as_ref().unwrap_or(&self.state.dropped);
        let objective = self.model.objective(&costs, dropped_ref);

        let routes: Vec<&[usize]> = (0..self.state.routes.len())
            .map(|vehicle| {
                changes
                    .iter()
                    .find(|(changed, _)| *changed == vehicle)
                    .map_or(self.state.routes[vehicle].as_slice(), |(_, nodes)| nodes.as_slice())
            })
            .collect();

        if self.penalties.augment(self.model, objective, &routes) >= self.current() {
            return false;
        }

        changes.into_iter().for_each(|(vehicle, nodes)| self.state.routes[vehicle] = nodes);
        if let Some(dropped) = dropped {
            self.state.dropped = dropped;
        }
        self.state.costs = costs;
        self.state.objective = objective;

        true
    }
}

fn insert_dropped(ctx: &mut MoveContext) -> bool {
    for idx in 0..ctx.state.dropped.len() {
        let node = ctx.state.dropped[idx];
        let mut dropped = ctx.state.dropped.clone();
        dropped.remove(idx);

        for vehicle in 0..ctx.state.routes.len() {
            if ctx.is_expired() {
                return false;
            }

            for position in 0..=ctx.state.routes[vehicle].len() {
                let mut route = ctx.state.routes[vehicle].clone();
                route.insert(position, node);

                if ctx.try_apply(vec![(vehicle, route)], Some(dropped.clone())) {
                    return true;
                }
            }
        }
    }

    false
}

fn relocate(ctx: &mut MoveContext) -> bool {
    let vehicles = ctx.state.routes.len();

    for source in 0..vehicles {
        for idx in 0..ctx.state.routes[source].len() {
            if ctx.is_expired() {
                return false;
            }

            let mut source_route = ctx.state.routes[source].clone();
            let node = source_route.remove(idx);

            for target in 0..vehicles {
                if target == source {
                    for position in (0..=source_route.len()).filter(|&position| position != idx) {
                        let mut route = source_route.clone();
                        route.insert(position, node);

                        if ctx.try_apply(vec![(source, route)], None) {
                            return true;
                        }
                    }
                } else {
                    for position in 0..=ctx.state.routes[target].len() {
                        let mut target_route = ctx.state.routes[target].clone();
                        target_route.insert(position, node);

                        if ctx.try_apply(vec![(source, source_route.clone()), (target, target_route)], None) {
                            return true;
                        }
                    }
                }
            }
        }
    }

    false
}

fn exchange(ctx: &mut MoveContext) -> bool {
    let vehicles = ctx.state.routes.len();

    for first in 0..vehicles {
        for i in 0..ctx.state.routes[first].len() {
            if ctx.is_expired() {
                return false;
            }

            for second in first..vehicles {
                let start = if first == second { i + 1 } else { 0 };

                for j in start..ctx.state.routes[second].len() {
                    let changes = if first == second {
                        let mut route = ctx.state.routes[first].clone();
                        route.swap(i, j);
                        vec![(first, route)]
                    } else {
                        let mut first_route = ctx.state.routes[first].clone();
                        let mut second_route = ctx.state.routes[second].clone();
                        std::mem::swap(&mut first_route[i], &mut second_route[j]);
                        vec![(first, first_route), (second, second_route)]
                    };

                    if ctx.try_apply(changes, None) {
                        return true;
                    }
                }
            }
        }
    }

    false
}

fn two_opt(ctx: &mut MoveContext) -> bool {
    for vehicle in 0..ctx.state.routes.len() {
        let size = ctx.state.routes[vehicle].len();

        for i in 0..size {
            if ctx.is_expired() {
                return false;
            }

            for j in (i + 2)..size {
                let mut route = ctx.state.routes[vehicle].clone();
                route[i..=j].reverse();

                if ctx.try_apply(vec![(vehicle, route)], None) {
                    return true;
                }
            }
        }
    }

    false
}

fn replace_dropped(ctx: &mut MoveContext) -> bool {
    for idx in 0..ctx.state.dropped.len() {
        let node = ctx.state.dropped[idx];

        for vehicle in 0..ctx.state.routes.len() {
            if ctx.is_expired() {
                return false;
            }

            for position in 0..ctx.state.routes[vehicle].len() {
                let mut route = ctx.state.routes[vehicle].clone();
                let mut dropped = ctx.state.dropped.clone();
                dropped[idx] = std::mem::replace(&mut route[position], node);

                if ctx.try_apply(vec![(vehicle, route)], Some(dropped)) {
                    return true;
                }
            }
        }
    }

    false
}

fn drop_node(ctx: &mut MoveContext) -> bool {
    for vehicle in 0..ctx.state.routes.len() {
        for position in 0..ctx.state.routes[vehicle].len() {
            if ctx.is_expired() {
                return false;
            }

            let mut route = ctx.state.routes[vehicle].clone();
            let node = route.remove(position);
            if ctx.model.drop_penalties[node].is_none() {
                continue;
            }

            let mut dropped = ctx.state.dropped.clone();
            dropped.push(node);

            if ctx.try_apply(vec![(vehicle, route)], Some(dropped)) {
                return true;
            }
        }
    }

    false
}

fn get_arcs<'a>(model: &RoutingModel, nodes: &'a [usize]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let depot = model.depot;
    let path = std::iter::once(depot).chain(nodes.iter().copied()).chain(std::iter::once(depot));

    path.clone().zip(path.skip(1)).filter(move |_| !nodes.is_empty())
}
