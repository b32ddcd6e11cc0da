//! # Error Hierarchy
//!
//! Structured error types for the route optimizer, built with `thiserror`.
//!
//! Validation errors carry the rejected input and the expected form so a
//! caller can report the problem without guesswork. Planning errors are
//! per-request and never fatal to the process.

use thiserror::Error;

use crate::port::PortCode;

/// Validation errors for domain primitives and request parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Port code is not 2-8 ASCII alphanumeric characters.
    #[error("invalid port code: \"{0}\" (expected 2-8 ASCII letters or digits)")]
    InvalidPortCode(String),

    /// Latitude or longitude is outside its range or not finite.
    #[error("invalid coordinates: lat={lat}, lon={lon} (expected lat in [-90, 90], lon in [-180, 180])")]
    InvalidCoordinates {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },

    /// A numeric request parameter violates its constraint.
    #[error("invalid {name}: {value} ({reason})")]
    InvalidParameter {
        /// Parameter name as the caller supplied it.
        name: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// Human-readable constraint.
        reason: &'static str,
    },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::InvalidParameter`].
    pub fn parameter(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

/// Errors raised while planning a route.
///
/// "No feasible route" is deliberately absent: an empty plan is a normal
/// outcome, not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Origin, destination, or a path node is not in the port table.
    #[error("unknown port: {0}")]
    UnknownPort(PortCode),

    /// Request parameters failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}
