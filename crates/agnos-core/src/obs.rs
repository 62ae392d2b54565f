//! Structured logging setup.
//!
//! Both processes emit one JSON object per line on stdout: `timestamp`,
//! `level`, `message`, plus whatever fields the event recorded (`service`
//! and `environment` are recorded at every call site that represents an
//! operational event). Filtering comes from `RUST_LOG`, defaulting to
//! `info`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide JSON subscriber.
///
/// Safe to call more than once; later calls are no-ops (this matters for
/// tests that share a process).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
