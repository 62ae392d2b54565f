//! Runtime environment label (`APP_ENV`).
//!
//! The label flows into every log line and health payload. Unknown values
//! are carried verbatim rather than rejected: deployment names environments,
//! the process just reports them.

use std::env;
use std::fmt;

const ENV_VAR: &str = "APP_ENV";

/// Environment the process believes it is running in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEnv {
    Development,
    Production,
    /// Any other deployment-defined label (e.g. "staging").
    Other(String),
}

impl RuntimeEnv {
    /// Read from `APP_ENV`, defaulting to `development` when unset or empty.
    pub fn from_env() -> Self {
        match env::var(ENV_VAR) {
            Ok(v) if !v.trim().is_empty() => Self::from_label(v.trim()),
            _ => RuntimeEnv::Development,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "development" => RuntimeEnv::Development,
            "production" => RuntimeEnv::Production,
            other => RuntimeEnv::Other(other.to_string()),
        }
    }

    /// Label as it appears in logs and health responses.
    pub fn as_str(&self) -> &str {
        match self {
            RuntimeEnv::Development => "development",
            RuntimeEnv::Production => "production",
            RuntimeEnv::Other(s) => s,
        }
    }
}

impl fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_variants() {
        assert_eq!(RuntimeEnv::from_label("development"), RuntimeEnv::Development);
        assert_eq!(RuntimeEnv::from_label("production"), RuntimeEnv::Production);
    }

    #[test]
    fn unknown_label_is_carried_verbatim() {
        let env = RuntimeEnv::from_label("staging");
        assert_eq!(env, RuntimeEnv::Other("staging".to_string()));
        assert_eq!(env.as_str(), "staging");
    }
}
