//! # Default Cost Constants
//!
//! The constants a request falls back to when a field is omitted, and the
//! two small arithmetic helpers shared by the scorer and the API layer.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Reference vessel speed in km/h, used for nominal edge times.
pub const REFERENCE_SPEED_KMH: f64 = 20.0;

/// Handling cost charged at a port with no override.
pub const DEFAULT_HANDLING_COST: f64 = 500.0;

/// Fuel price per kilometre when the caller supplies none.
pub const DEFAULT_FUEL_PRICE_PER_KM: f64 = 0.12;

/// Maximum number of edges in an enumerated path.
pub const DEFAULT_MAX_HOPS: usize = 6;

/// Vessel capacity assumed by front ends that pre-fill a form.
pub const DEFAULT_CAPACITY_TONS: f64 = 1000.0;

/// Capacity at which the capacity factor equals 1.0.
pub const CAPACITY_REFERENCE_TONS: f64 = 1000.0;

/// Lower bound of the capacity factor.
pub const CAPACITY_FACTOR_FLOOR: f64 = 0.5;

/// Planner defaults that a network manifest may override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerDefaults {
    /// Reference speed (km/h) for nominal edge times and omitted speeds.
    pub reference_speed_kmh: f64,
    /// Handling cost for ports without an override.
    pub handling_cost: f64,
    /// Fuel price per km for requests that omit it.
    pub fuel_price_per_km: f64,
    /// Hop limit for requests that omit it.
    pub max_hops: usize,
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            reference_speed_kmh: REFERENCE_SPEED_KMH,
            handling_cost: DEFAULT_HANDLING_COST,
            fuel_price_per_km: DEFAULT_FUEL_PRICE_PER_KM,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }
}

impl PlannerDefaults {
    /// Check that every default is usable by the scorer.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidParameter`] for a non-positive speed
    /// or fuel price, a negative handling cost, or a zero hop limit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.reference_speed_kmh.is_finite() && self.reference_speed_kmh > 0.0) {
            return Err(ValidationError::parameter(
                "reference_speed_kmh",
                self.reference_speed_kmh,
                "must be a positive number",
            ));
        }
        if !(self.handling_cost.is_finite() && self.handling_cost >= 0.0) {
            return Err(ValidationError::parameter(
                "handling_cost",
                self.handling_cost,
                "must be a non-negative number",
            ));
        }
        if !(self.fuel_price_per_km.is_finite() && self.fuel_price_per_km > 0.0) {
            return Err(ValidationError::parameter(
                "fuel_price_per_km",
                self.fuel_price_per_km,
                "must be a positive number",
            ));
        }
        if self.max_hops == 0 {
            return Err(ValidationError::parameter(
                "max_hops",
                self.max_hops,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Edge-cost multiplier for a vessel of `capacity_tons`.
///
/// `capacity / 1000`, floored at 0.5 so small or non-positive capacities
/// never scale the fuel cost towards zero.
pub fn capacity_factor(capacity_tons: f64) -> f64 {
    (capacity_tons / CAPACITY_REFERENCE_TONS).max(CAPACITY_FACTOR_FLOOR)
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_factor_floor() {
        assert_eq!(capacity_factor(0.0), 0.5);
        assert_eq!(capacity_factor(-200.0), 0.5);
        assert_eq!(capacity_factor(300.0), 0.5);
        assert_eq!(capacity_factor(500.0), 0.5);
    }

    #[test]
    fn capacity_factor_linear_above_floor() {
        assert_eq!(capacity_factor(1000.0), 1.0);
        assert_eq!(capacity_factor(2500.0), 2.5);
        assert!(capacity_factor(501.0) > 0.5);
    }

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(4335.3512), 4335.35);
        assert_eq!(round2(1181.3958), 1181.4);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn defaults_validate() {
        assert!(PlannerDefaults::default().validate().is_ok());
        let bad = PlannerDefaults {
            max_hops: 0,
            ..PlannerDefaults::default()
        };
        assert!(bad.validate().is_err());
        let bad = PlannerDefaults {
            reference_speed_kmh: 0.0,
            ..PlannerDefaults::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn partial_defaults_deserialize() {
        let parsed: PlannerDefaults = serde_json::from_str(r#"{"handling_cost": 650.0}"#).unwrap();
        assert_eq!(parsed.handling_cost, 650.0);
        assert_eq!(parsed.max_hops, DEFAULT_MAX_HOPS);
        assert_eq!(parsed.reference_speed_kmh, REFERENCE_SPEED_KMH);
    }
}
