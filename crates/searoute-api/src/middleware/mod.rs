//! # Middleware
//!
//! Execution order, outermost first:
//!
//! ```text
//! CorsLayer → TraceLayer → metrics_middleware → Handler
//! ```

pub mod metrics;
pub mod tracing_layer;
