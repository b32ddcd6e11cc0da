//! # API Route Modules
//!
//! - `ports`: port table and single-port lookup.
//! - `network`: precomputed edge metrics.
//! - `optimize`: route planning.

pub mod network;
pub mod optimize;
pub mod ports;
