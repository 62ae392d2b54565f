//! agnos API library entry.
//!
//! Wires the config, shared state, request tracking, and operational
//! endpoints into the HTTP surface served by `main.rs`. Split out as a
//! library so integration tests can drive the router in-process.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
