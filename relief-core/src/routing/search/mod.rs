//! A built-in routing solver: path cheapest arc construction refined by guided local search.

#[cfg(test)]
#[path = "../../../tests/unit/routing/search/search_test.rs"]
mod search_test;

mod construction;
use self::construction::build_path_cheapest_arc;

mod local_search;
use self::local_search::{ArcPenalties, descend};

mod state;
use self::state::SearchState;

use super::{Assignment, FirstSolutionStrategy, LocalSearchMetaheuristic, RoutingModel, RoutingSolver};
use crate::utils::{Environment, Timer};

/// Solves routing models with guided local search.
pub struct GuidedLocalSearchSolver {
    alpha: f64,
}

impl GuidedLocalSearchSolver {
    /// Creates a new instance of `GuidedLocalSearchSolver` where `alpha` scales arc penalties
    /// relative to the average arc cost of the first local optimum.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl Default for GuidedLocalSearchSolver {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl RoutingSolver for GuidedLocalSearchSolver {
    fn solve(&self, model: &RoutingModel, environment: &Environment) -> Option<Assignment> {
        if let Err(err) = model.validate() {
            environment.log(&format!("invalid routing model: {err}"));
            return None;
        }

        let timer = Timer::start();
        let parameters = &model.search;

        let initial = match parameters.first_solution_strategy {
            FirstSolutionStrategy::PathCheapestArc => build_path_cheapest_arc(model),
        };

        let Some(mut state) = initial else {
            environment.log("cannot build initial solution: mandatory nodes cannot be served");
            return None;
        };

        environment.log(&format!(
            "initial solution: objective {}, dropped {}, took {}ms",
            state.objective,
            state.dropped.len(),
            timer.elapsed_millis()
        ));

        let mut penalties = ArcPenalties::default();
        let mut best = state.clone();
        let mut iteration = 0;

        loop {
            descend(model, &mut state, &penalties, &timer);

            if state.objective < best.objective {
                best = state.clone();
                environment.log(&format!(
                    "[{}s] iteration {iteration}: new best objective {}, dropped {}",
                    timer.elapsed().as_secs(),
                    best.objective,
                    best.dropped.len()
                ));
            }

            iteration += 1;

            let is_terminated = parameters.local_search_metaheuristic == LocalSearchMetaheuristic::GreedyDescent
                || timer.is_expired(parameters.time_limit)
                || parameters.iteration_limit.is_some_and(|limit| iteration >= limit);

            if is_terminated || !penalties.penalize(model, &state, self.alpha) {
                break;
            }
        }

        environment.log(&format!(
            "search finished after {iteration} iterations in {}ms, objective {}",
            timer.elapsed_millis(),
            best.objective
        ));

        Assignment::from_sequences(model, best.routes)
            .map_err(|err| environment.log(&format!("cannot create assignment: {err}")))
            .ok()
    }
}
