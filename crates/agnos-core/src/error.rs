//! Shared error type across agnos crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, AgnosError>;

/// Unified error type used by the API and worker processes.
#[derive(Debug, Error)]
pub enum AgnosError {
    #[error("config: {0}")]
    Config(String),
    #[error("schedule: {0}")]
    Schedule(String),
    #[error("metrics: {0}")]
    Metrics(#[from] prometheus::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
