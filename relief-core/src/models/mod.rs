//! A collection of models to represent a relief distribution problem and its plan.

pub mod common;
pub use self::common::*;

mod config;
pub use self::config::*;

mod plan;
pub use self::plan::*;

mod problem;
pub use self::problem::*;
