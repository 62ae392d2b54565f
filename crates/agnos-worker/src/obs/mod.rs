//! Worker observability.

pub mod metrics;
