//! This module defines logic to serialize/deserialize relief request and road matrix in pragmatic
//! format from json input and create and write pragmatic plan.
//!

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use relief_core::utils::PlanningError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod problem;
pub mod solution;

/// A format error.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// Keeps multiple format errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Formats multiple format errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|_| self.to_string())
    }
}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        Self { errors: vec![error] }
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

/// Maps planning failure to format error.
pub fn map_planning_error(error: &PlanningError) -> FormatError {
    match error {
        PlanningError::NoSolution => FormatError::new(
            "E2001".to_string(),
            "no solution found".to_string(),
            "increase time limit, fleet size or vehicle capacity".to_string(),
        ),
        PlanningError::InvalidInput(details) => FormatError::new_with_details(
            "E2002".to_string(),
            "cannot plan relief distribution".to_string(),
            "check request".to_string(),
            details.clone(),
        ),
        PlanningError::Failure(err) => FormatError::new_with_details(
            "E2002".to_string(),
            "cannot plan relief distribution".to_string(),
            "report the issue with the request attached".to_string(),
            err.to_string(),
        ),
    }
}
