//! Routing module encodes a relief problem as a constrained vehicle routing problem and solves it
//! through a pluggable routing solver.

mod model;
pub use self::model::*;

mod solver;
pub use self::solver::*;

mod search;
pub use self::search::GuidedLocalSearchSolver;
