//! Specifies logic to read relief request and optional routing matrix from json input.

use super::*;
use relief_core::models::ReliefProblem;
use relief_core::transport::RoadNetwork;
use std::io::{BufReader, Read};
use std::sync::Arc;

mod model;
pub use self::model::*;

mod matrix_network;
pub use self::matrix_network::MatrixRoadNetwork;

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

mod reader;
use self::reader::map_to_problem;

/// A problem read from pragmatic format with road network built from routing matrix, if supplied.
pub struct PragmaticInput {
    /// A relief problem.
    pub problem: ReliefProblem,
    /// A road network backed by the routing matrix.
    pub road_network: Option<Arc<dyn RoadNetwork>>,
}

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem {
    /// Reads problem defined in pragmatic format.
    fn read_pragmatic(self) -> Result<PragmaticInput, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for (BufReader<R>, Option<BufReader<R>>) {
    fn read_pragmatic(self) -> Result<PragmaticInput, MultiFormatError> {
        let request = deserialize_request(self.0)?;
        let matrix = self.1.map(deserialize_matrix).transpose()?;

        map_to_problem(request, matrix)
    }
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic(self) -> Result<PragmaticInput, MultiFormatError> {
        map_to_problem(deserialize_request(self)?, None)
    }
}

impl PragmaticProblem for (String, Option<String>) {
    fn read_pragmatic(self) -> Result<PragmaticInput, MultiFormatError> {
        let request = deserialize_request(BufReader::new(self.0.as_bytes()))?;
        let matrix = self.1.map(|matrix| deserialize_matrix(BufReader::new(matrix.as_bytes()))).transpose()?;

        map_to_problem(request, matrix)
    }
}

impl PragmaticProblem for String {
    fn read_pragmatic(self) -> Result<PragmaticInput, MultiFormatError> {
        map_to_problem(deserialize_request(BufReader::new(self.as_bytes()))?, None)
    }
}

impl PragmaticProblem for (Request, Option<Matrix>) {
    fn read_pragmatic(self) -> Result<PragmaticInput, MultiFormatError> {
        map_to_problem(self.0, self.1)
    }
}

impl PragmaticProblem for Request {
    fn read_pragmatic(self) -> Result<PragmaticInput, MultiFormatError> {
        map_to_problem(self, None)
    }
}
