//! Worker process configuration (env-var based).

use agnos_core::config::{port_from_env, var_or};
use agnos_core::{AgnosError, Result, RuntimeEnv};
use chrono_tz::Tz;

use crate::job;

/// Service label used in logs and health payloads.
pub const SERVICE: &str = "worker";

pub const DEFAULT_METRICS_PORT: u16 = 9091;

/// Every minute, standard 5-field syntax.
pub const DEFAULT_CRON_SCHEDULE: &str = "* * * * *";

#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Health/metrics listen port (`METRICS_PORT`).
    pub metrics_port: u16,
    /// Job cadence (`CRON_SCHEDULE`, 5-field cron).
    pub cron_schedule: String,
    /// Zone the schedule is evaluated in (`TZ`).
    pub timezone: Tz,
    /// Environment label (`APP_ENV`).
    pub environment: RuntimeEnv,
}

impl WorkerConfig {
    pub fn from_env() -> Result<Self> {
        let cfg = Self {
            metrics_port: port_from_env("METRICS_PORT", DEFAULT_METRICS_PORT)?,
            cron_schedule: var_or("CRON_SCHEDULE", DEFAULT_CRON_SCHEDULE),
            timezone: parse_timezone(&var_or("TZ", "UTC"))?,
            environment: RuntimeEnv::from_env(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject bad schedules at startup rather than on first fire.
    pub fn validate(&self) -> Result<()> {
        job::parse_schedule(&self.cron_schedule)?;
        Ok(())
    }
}

fn parse_timezone(label: &str) -> Result<Tz> {
    label
        .parse::<Tz>()
        .map_err(|e| AgnosError::Config(format!("TZ must be an IANA zone name: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn timezone_parses_iana_names() {
        assert_eq!(parse_timezone("UTC").unwrap(), Tz::UTC);
        assert_eq!(parse_timezone("Asia/Bangkok").unwrap(), Tz::Asia__Bangkok);
    }

    #[test]
    fn timezone_rejects_garbage() {
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn validate_rejects_bad_schedule() {
        let cfg = WorkerConfig {
            metrics_port: DEFAULT_METRICS_PORT,
            cron_schedule: "not a schedule".to_string(),
            timezone: Tz::UTC,
            environment: RuntimeEnv::from_label("test"),
        };
        assert!(cfg.validate().is_err());
    }
}
