//! Equity allocator decides how much of each demand is served when fleet capacity is scarce.

#[cfg(test)]
#[path = "../../tests/unit/allocation/allocation_test.rs"]
mod allocation_test;

mod lp;
pub use self::lp::*;

mod priorities;
pub use self::priorities::*;

use crate::models::{AllocationOutcome, Load};
use crate::utils::Environment;

/// An allocation result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    /// Allocated amounts aligned with demands.
    pub amounts: Vec<Load>,
    /// Which path was taken to produce amounts.
    pub outcome: AllocationOutcome,
}

/// Allocates demands under fleet capacity guaranteeing an equity floor per served location.
///
/// Allocations are integral: LP values are truncated toward zero, so the total can be below the
/// continuous optimum by up to `n - 1` units.
pub fn allocate_equitably(
    demands: &[Load],
    capacity: Load,
    priorities: &[i64],
    equity_floor: f64,
    solver: &dyn LpSolver,
    environment: &Environment,
) -> Allocation {
    assert_eq!(demands.len(), priorities.len());

    // totals are exact even when request quantities are close to the type limit
    let total_demand: i128 = demands.iter().map(|&demand| demand as i128).sum();

    if demands.is_empty() || total_demand <= capacity as i128 {
        return Allocation { amounts: demands.to_vec(), outcome: AllocationOutcome::Unconstrained };
    }

    let bounds = demands
        .iter()
        .map(|&demand| if demand <= 0 { (0, 0) } else { (get_equity_floor(demand, equity_floor), demand) })
        .collect::<Vec<_>>();

    let total_floor: i128 = bounds.iter().map(|&(lower, _)| lower as i128).sum();
    if total_floor > capacity as i128 {
        environment.log(&format!(
            "equity floors require {total_floor} units, but capacity is {capacity}: use proportional allocation"
        ));

        return Allocation {
            amounts: allocate_proportionally(demands, capacity, total_demand),
            outcome: AllocationOutcome::Proportional,
        };
    }

    let problem = LpProblem {
        objective: priorities.iter().map(|&priority| priority as f64).collect(),
        upper_bound: capacity as f64,
        bounds: bounds.iter().map(|&(lower, upper)| (lower as f64, upper as f64)).collect(),
    };

    match solver.solve(&problem) {
        Ok(values) if values.len() == demands.len() => Allocation {
            amounts: values.into_iter().map(|value| value.trunc() as Load).collect(),
            outcome: AllocationOutcome::Optimized,
        },
        Ok(values) => {
            environment.log(&format!(
                "lp solver returned {} values for {} variables, fallback to unmodified demand",
                values.len(),
                demands.len()
            ));
            Allocation { amounts: demands.to_vec(), outcome: AllocationOutcome::Unmodified }
        }
        Err(err) => {
            environment.log(&format!("lp solver failed: '{err}', fallback to unmodified demand"));
            Allocation { amounts: demands.to_vec(), outcome: AllocationOutcome::Unmodified }
        }
    }
}

/// Returns the minimum amount which must be allocated to a served location.
pub fn get_equity_floor(demand: Load, equity_floor: f64) -> Load {
    ((demand as f64 * equity_floor).ceil() as Load).min(demand)
}

/// Splits capacity proportionally to each demand share, rounding down.
fn allocate_proportionally(demands: &[Load], capacity: Load, total_demand: i128) -> Vec<Load> {
    if total_demand <= 0 {
        return vec![0; demands.len()];
    }

    demands.iter().map(|&demand| (demand.max(0) as i128 * capacity.max(0) as i128 / total_demand) as Load).collect()
}
