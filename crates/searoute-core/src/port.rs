//! # Port Identifiers
//!
//! A port is a node in the route graph. Its [`PortCode`] is a short
//! upper-case code ("SIN", "LAX") validated at construction time, so two
//! spellings of the same code ("sin", " SIN ") compare equal once parsed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geo::GeoPoint;

/// Minimum accepted port code length.
const MIN_CODE_LEN: usize = 2;
/// Maximum accepted port code length.
const MAX_CODE_LEN: usize = 8;

/// A validated port code.
///
/// # Validation
///
/// Surrounding whitespace is trimmed and letters are upper-cased. The result
/// must be 2-8 ASCII alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PortCode(String);

impl PortCode {
    /// Parse and normalize a port code.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPortCode`] if the normalized code is
    /// too short, too long, or contains non-alphanumeric characters.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let normalized = value.trim().to_ascii_uppercase();
        let len_ok = (MIN_CODE_LEN..=MAX_CODE_LEN).contains(&normalized.len());
        if !len_ok || !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidPortCode(value.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PortCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PortCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PortCode> for String {
    fn from(code: PortCode) -> Self {
        code.0
    }
}

impl AsRef<str> for PortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A maritime port: code, display name, and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Unique short code.
    pub code: PortCode,
    /// Human-readable name.
    pub name: String,
    /// Geographic position.
    pub location: GeoPoint,
}

impl Port {
    /// Create a port.
    pub fn new(code: PortCode, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            code,
            name: name.into(),
            location,
        }
    }
}
