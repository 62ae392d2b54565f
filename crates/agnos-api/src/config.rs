//! API process configuration (env-var based).

use agnos_core::config::port_from_env;
use agnos_core::{Result, RuntimeEnv};

/// Service label used in logs and health payloads.
pub const SERVICE: &str = "api";

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port (`PORT`).
    pub port: u16,
    /// Environment label (`APP_ENV`).
    pub environment: RuntimeEnv,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: port_from_env("PORT", DEFAULT_PORT)?,
            environment: RuntimeEnv::from_env(),
        })
    }
}
