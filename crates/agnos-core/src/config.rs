//! Env-var parsing helpers shared by the binaries.
//!
//! Parsing is split from `std::env` access so validation logic stays
//! testable without touching process-global state.

use std::env;

use crate::error::{AgnosError, Result};

/// Read a listen port from `var`, falling back to `default` when the
/// variable is unset or empty.
pub fn port_from_env(var: &str, default: u16) -> Result<u16> {
    parse_port(env::var(var).ok().as_deref(), var, default)
}

/// Validate a raw port value. Port 0 is rejected: these processes announce
/// their port in logs, so "pick one for me" is never what the operator meant.
pub fn parse_port(raw: Option<&str>, var: &str, default: u16) -> Result<u16> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };
    let port: u16 = raw
        .parse()
        .map_err(|_| AgnosError::Config(format!("{var} must be an integer in 1..=65535, got {raw:?}")))?;
    if port == 0 {
        return Err(AgnosError::Config(format!("{var} must not be 0")));
    }
    Ok(port)
}

/// Read a string variable with a default for unset/empty.
pub fn var_or(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn unset_or_empty_port_uses_default() {
        assert_eq!(parse_port(None, "PORT", 8000).unwrap(), 8000);
        assert_eq!(parse_port(Some("  "), "PORT", 8000).unwrap(), 8000);
    }

    #[test]
    fn valid_port_is_parsed() {
        assert_eq!(parse_port(Some("9091"), "METRICS_PORT", 9091).unwrap(), 9091);
        assert_eq!(parse_port(Some(" 8080 "), "PORT", 8000).unwrap(), 8080);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(parse_port(Some("0"), "PORT", 8000).is_err());
        assert!(parse_port(Some("70000"), "PORT", 8000).is_err());
        assert!(parse_port(Some("eight"), "PORT", 8000).is_err());
    }
}
