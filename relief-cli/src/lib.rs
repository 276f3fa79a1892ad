//! A crate contains a command line interface and helper functionality to plan disaster relief
//! distribution from requests in pragmatic json format.
//!

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod extensions;

use crate::extensions::plan::config::Config;
use crate::extensions::plan::plan_pragmatic;
use relief_core::utils::Environment;
use relief_pragmatic::format::problem::{deserialize_matrix, deserialize_request};
use std::io::BufReader;
use std::sync::Arc;

/// Plans request serialized in pragmatic json with optional routing matrix. Returns plan or
/// errors serialized in json.
pub fn get_plan_serialized(
    request: &str,
    matrix: Option<&str>,
    config: &Config,
    environment: Arc<Environment>,
) -> Result<String, String> {
    let request = deserialize_request(BufReader::new(request.as_bytes())).map_err(|errors| errors.to_json())?;
    let matrix = matrix
        .map(|matrix| deserialize_matrix(BufReader::new(matrix.as_bytes())))
        .transpose()
        .map_err(|errors| errors.to_json())?;

    let solution = plan_pragmatic(request, matrix, config, environment)?;

    serde_json::to_string_pretty(&solution).map_err(|err| err.to_string())
}
