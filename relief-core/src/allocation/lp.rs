#[cfg(test)]
#[path = "../../tests/unit/allocation/lp_test.rs"]
mod lp_test;

use crate::utils::{GenericResult, compare_floats};

/// A linear program with a single aggregate upper bound:
///
/// maximize Σ objective[i]·x[i] subject to Σ x[i] ≤ upper_bound, bounds[i].0 ≤ x[i] ≤ bounds[i].1
#[derive(Clone, Debug)]
pub struct LpProblem {
    /// Objective weights.
    pub objective: Vec<f64>,
    /// Upper bound of the sum of all variables.
    pub upper_bound: f64,
    /// Per variable lower and upper bounds.
    pub bounds: Vec<(f64, f64)>,
}

/// Solves linear programs. Returns variable values or an error when problem is infeasible or
/// solver is unavailable.
pub trait LpSolver: Send + Sync {
    /// Solves the given problem.
    fn solve(&self, problem: &LpProblem) -> GenericResult<Vec<f64>>;
}

/// An exact solver for `LpProblem`: with a single sum constraint the optimum is obtained by
/// raising variables from their lower bounds in descending order of objective weight.
#[derive(Default)]
pub struct BoundedSumLpSolver {}

impl LpSolver for BoundedSumLpSolver {
    fn solve(&self, problem: &LpProblem) -> GenericResult<Vec<f64>> {
        if problem.objective.len() != problem.bounds.len() {
            return Err(format!(
                "objective has {} weights, but {} bounds are specified",
                problem.objective.len(),
                problem.bounds.len()
            )
            .into());
        }

        if let Some(idx) = problem.bounds.iter().position(|&(lower, upper)| lower > upper) {
            return Err(format!("variable {idx} has lower bound greater than upper bound").into());
        }

        let mut values = problem.bounds.iter().map(|&(lower, _)| lower).collect::<Vec<_>>();
        let mut remaining = problem.upper_bound - values.iter().sum::<f64>();

        if remaining < 0. {
            return Err("lower bounds exceed upper bound of the sum".into());
        }

        let mut order = (0..values.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| compare_floats(problem.objective[b], problem.objective[a]));

        for idx in order.into_iter().filter(|&idx| problem.objective[idx] > 0.) {
            if remaining <= 0. {
                break;
            }

            let increase = (problem.bounds[idx].1 - values[idx]).min(remaining);
            values[idx] += increase;
            remaining -= increase;
        }

        Ok(values)
    }
}
