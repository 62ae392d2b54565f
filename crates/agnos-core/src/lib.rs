//! agnos core: error surface, runtime-environment model, and logging setup
//! shared by the API and worker binaries.
//!
//! This crate carries no HTTP or scheduling dependencies so either process
//! can pull it in without dragging along the other's stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `AgnosError`/`Result` so the
//! long-running processes do not crash on bad input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod environment;
pub mod error;
pub mod health;
pub mod obs;

/// Shared result type.
pub use error::{AgnosError, Result};

pub use environment::RuntimeEnv;
