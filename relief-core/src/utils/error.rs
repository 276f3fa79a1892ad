use std::hash::{Hash, Hasher};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Specifies a planning failure surfaced to the caller. Degradations of external services are
/// absorbed by fallbacks and never end up here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanningError {
    /// Input is not plannable: no locations, non-positive capacity, etc.
    InvalidInput(String),
    /// Routing solver returned no solution within its time budget.
    NoSolution,
    /// Any other unexpected failure.
    Failure(GenericError),
}

impl std::fmt::Display for PlanningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NoSolution => write!(f, "no solution found"),
            Self::Failure(err) => write!(f, "planning failed: {err}"),
        }
    }
}

impl std::error::Error for PlanningError {}

impl From<GenericError> for PlanningError {
    fn from(err: GenericError) -> Self {
        Self::Failure(err)
    }
}
