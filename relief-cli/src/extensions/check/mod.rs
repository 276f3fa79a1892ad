//! A helper module which contains functionality to run feasibility checks on plan.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use relief_pragmatic::checker::CheckerContext;
use relief_pragmatic::format::problem::deserialize_request;
use relief_pragmatic::format::solution::deserialize_solution;
use std::io::{BufReader, Read};

/// Checks pragmatic plan feasibility against its request.
pub fn check_pragmatic_solution<F: Read>(
    request_reader: BufReader<F>,
    solution_reader: BufReader<F>,
) -> Result<(), Vec<String>> {
    let request = deserialize_request(request_reader).map_err(|err| vec![format!("cannot read request: '{err}'")])?;
    let solution =
        deserialize_solution(solution_reader).map_err(|err| vec![format!("cannot read solution: '{err}'")])?;

    CheckerContext::new(request, solution).check()
}
