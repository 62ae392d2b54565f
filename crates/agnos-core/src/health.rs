//! Health payload shared by both processes.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::environment::RuntimeEnv;

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub service: &'static str,
    pub environment: String,
    pub timestamp: String,
}

impl HealthBody {
    /// "ok" stamped with the current instant. These processes are healthy
    /// exactly when they can answer at all; there is no deeper probe.
    pub fn ok(service: &'static str, environment: &RuntimeEnv) -> Self {
        Self {
            status: "ok",
            service,
            environment: environment.as_str().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
