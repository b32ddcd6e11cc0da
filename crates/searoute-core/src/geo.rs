//! # Great-Circle Distance
//!
//! Spherical-earth haversine distance between two validated coordinates.
//!
//! The haversine term `h` is clamped to `[0, 1]` before the inverse
//! trigonometric step, so rounding error near identical or antipodal points
//! cannot push `sqrt(1 - h)` into NaN.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees, range-checked at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            lat: f64,
            lon: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.lat, raw.lon).map_err(serde::de::Error::custom)
    }
}

impl GeoPoint {
    /// Create a point.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCoordinates`] if either value is not
    /// finite, or latitude is outside `[-90, 90]`, or longitude outside
    /// `[-180, 180]`.
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        if !lat_ok || !lon_ok {
            return Err(ValidationError::InvalidCoordinates { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Great-circle distance in kilometres between two points.
///
/// Non-negative, zero for identical points, and symmetric in its arguments.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn identical_points_are_zero() {
        let p = pt(1.3521, 103.8198);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = haversine_km(pt(0.0, 0.0), pt(0.0, 180.0));
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - expected).abs() < 1e-6, "got {d}");
        assert!(haversine_km(pt(90.0, 0.0), pt(-90.0, 0.0)).is_finite());
    }

    #[test]
    fn singapore_to_panama_city() {
        // Matches the reference haversine implementation to the metre.
        let d = haversine_km(pt(1.3521, 103.8198), pt(8.9833, -79.5167));
        assert!((d - 18_807.851).abs() < 0.01, "got {d}");
    }

    #[test]
    fn deserialize_validates_range() {
        let ok: GeoPoint = serde_json::from_str(r#"{"lat": 22.3, "lon": 114.1}"#).unwrap();
        assert_eq!(ok.lat(), 22.3);
        assert!(serde_json::from_str::<GeoPoint>(r#"{"lat": 120.0, "lon": 0.0}"#).is_err());
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = pt(lat1, lon1);
            let b = pt(lat2, lon2);
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn distance_is_bounded(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let d = haversine_km(pt(lat1, lon1), pt(lat2, lon2));
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
