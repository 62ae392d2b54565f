//! agnos worker library entry.
//!
//! A scheduled stub job plus a small health/metrics HTTP surface. Split as
//! a library so integration tests can run the job and drive the router
//! in-process.

pub mod app_state;
pub mod config;
pub mod job;
pub mod obs;
pub mod ops;
pub mod router;
