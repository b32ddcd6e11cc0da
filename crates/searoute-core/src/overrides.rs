//! # Per-Port Handling Overrides
//!
//! Callers may replace the default handling cost for individual ports, either
//! as a mapping (`{"HKG": 999}`) or as the form string `"HKG:600,SIN:700"`.
//!
//! Parsing is lenient: a malformed entry is skipped and reported in
//! [`OverrideParse::rejected`], while every valid entry still applies. A
//! single bad token never aborts the whole request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::port::PortCode;

/// Handling-cost overrides keyed by port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlingOverrides(BTreeMap<PortCode, f64>);

impl HandlingOverrides {
    /// An empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handling cost for `code`, replacing any earlier value.
    pub fn insert(&mut self, code: PortCode, cost: f64) -> Option<f64> {
        self.0.insert(code, cost)
    }

    /// Handling cost for `code`, or `default` when no override is present.
    pub fn cost_for(&self, code: &PortCode, default: f64) -> f64 {
        self.0.get(code).copied().unwrap_or(default)
    }

    /// Override for `code`, if any.
    pub fn get(&self, code: &PortCode) -> Option<f64> {
        self.0.get(code).copied()
    }

    /// Iterate overrides in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&PortCode, f64)> {
        self.0.iter().map(|(code, cost)| (code, *cost))
    }

    /// Number of overridden ports.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no port is overridden.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build overrides from `(code, cost)` entries with the lenient policy.
    pub fn from_entries<I, S>(entries: I) -> OverrideParse
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self::from_checked_entries(entries.into_iter().map(|(code, cost)| (code, Ok(cost))))
    }

    /// Like [`HandlingOverrides::from_entries`], for entries whose cost may
    /// already have failed to parse. An `Err` carries the reason the entry is
    /// skipped. Rejected entries are reported as `CODE:value` tokens.
    pub fn from_checked_entries<I, S>(entries: I) -> OverrideParse
    where
        I: IntoIterator<Item = (S, Result<f64, String>)>,
        S: AsRef<str>,
    {
        let mut parse = OverrideParse::default();
        for (code, cost) in entries {
            let code = code.as_ref();
            let token = match &cost {
                Ok(value) => format!("{code}:{value}"),
                Err(_) => code.to_string(),
            };
            parse.accept(&token, code, cost);
        }
        parse
    }
}

impl FromIterator<(PortCode, f64)> for HandlingOverrides {
    fn from_iter<T: IntoIterator<Item = (PortCode, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An override entry that was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedOverride {
    /// The offending token as supplied.
    pub token: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of lenient override parsing: the accepted mapping plus every
/// skipped entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideParse {
    /// Entries that parsed and validated.
    pub overrides: HandlingOverrides,
    /// Entries that were skipped, in input order.
    pub rejected: Vec<RejectedOverride>,
}

impl OverrideParse {
    fn reject(&mut self, token: &str, reason: impl Into<String>) {
        self.rejected.push(RejectedOverride {
            token: token.to_string(),
            reason: reason.into(),
        });
    }

    fn accept(&mut self, token: &str, code: &str, cost: Result<f64, String>) {
        let code = match PortCode::parse(code) {
            Ok(code) => code,
            Err(e) => return self.reject(token, e.to_string()),
        };
        match cost {
            Ok(cost) if cost.is_finite() && cost >= 0.0 => {
                self.overrides.insert(code, cost);
            }
            Ok(cost) => self.reject(token, format!("cost must be a non-negative number, got {cost}")),
            Err(reason) => self.reject(token, reason),
        }
    }

    /// Whether every entry was accepted.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse the comma-separated `CODE:cost` form.
///
/// Empty tokens (`"HKG:600,,SIN:700"`, trailing commas) are ignored rather
/// than rejected. Codes are normalized like [`PortCode::parse`].
pub fn parse_overrides(raw: &str) -> OverrideParse {
    let mut parse = OverrideParse::default();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let mut parts = token.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(code), Some(value), None) => {
                let value = value.trim();
                let cost = value
                    .parse::<f64>()
                    .map_err(|_| format!("cost is not a number: \"{value}\""));
                parse.accept(token, code, cost);
            }
            _ => parse.reject(token, "expected CODE:cost"),
        }
    }
    parse
}
