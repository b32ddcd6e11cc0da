//! # searoute-planner: Route Planning
//!
//! Finds the cheapest route between two ports that arrives within a
//! deadline.
//!
//! - **Enumerate** (`enumerate.rs`): lazy, hop-bounded simple-path
//!   enumeration over a [`PortNetwork`](searoute_network::PortNetwork).
//! - **Score** (`score.rs`): [`CostModel`] turns a path into cost, time,
//!   and a breakdown.
//! - **Plan** (`plan.rs`): [`RoutePlanner`] resolves a [`RouteRequest`],
//!   filters by deadline, and ranks the survivors.
//!
//! Planning is synchronous and allocation-light; the planner holds only an
//! immutable network and can be shared behind an `Arc`.

pub mod enumerate;
pub mod plan;
pub mod score;

pub use enumerate::{enumerate_paths, SimplePaths};
pub use plan::{Candidate, Candidates, RoutePlan, RoutePlanner, RouteRequest, RouteRequestBuilder};
pub use score::{CostModel, CostParams, PathScore};
