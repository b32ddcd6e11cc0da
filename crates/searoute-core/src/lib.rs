#![deny(missing_docs)]

//! # searoute-core: Foundational Types for the Route Optimizer
//!
//! This crate defines the primitives every other crate in the workspace
//! depends on. It has no internal crate dependencies: only `serde` and
//! `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`PortCode`] is validated
//!    at construction; no bare strings travel through the planner.
//!
//! 2. **[`GeoPoint`] is the sole input to distance computation.** Coordinates
//!    are range-checked once, so [`haversine_km`] never sees NaN or
//!    out-of-range degrees.
//!
//! 3. **Lenient override parsing is explicit.** [`parse_overrides`] returns
//!    both the accepted mapping and every rejected token.
//!
//! 4. **Structured errors.** [`ValidationError`] and [`PlanError`] built with
//!    `thiserror`: no `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `searoute-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.

pub mod defaults;
pub mod error;
pub mod geo;
pub mod overrides;
pub mod port;

// Re-export primary types at crate root for ergonomic imports.
pub use defaults::{
    capacity_factor, round2, PlannerDefaults, CAPACITY_FACTOR_FLOOR, CAPACITY_REFERENCE_TONS,
    DEFAULT_CAPACITY_TONS, DEFAULT_FUEL_PRICE_PER_KM, DEFAULT_HANDLING_COST, DEFAULT_MAX_HOPS,
    REFERENCE_SPEED_KMH,
};
pub use error::{PlanError, ValidationError};
pub use geo::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use overrides::{parse_overrides, HandlingOverrides, OverrideParse, RejectedOverride};
pub use port::{Port, PortCode};
