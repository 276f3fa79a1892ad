//! Specifies logic to create a "pragmatic" plan and write it into json format.

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::PragmaticSolution;
pub use self::writer::create_solution;
