//! Gateway configuration
//!
//! Loaded once at start-up from the environment (a `.env` file is read first
//! when present). Later sources override earlier ones:
//!
//! 1. Defaults
//! 2. `PORT`
//! 3. `STABLECOIN_API_*` variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `STABLECOIN_API_HOST` | Bind host | `0.0.0.0` |
//! | `STABLECOIN_API_PORT` | Bind port (falls back to `PORT`) | `3000` |
//! | `STABLECOIN_API_LOG` | Default log filter when `RUST_LOG` is unset | `info,tower_http=debug` |
//! | `STABLECOIN_API_SERVICE_NAME` | Name reported by `GET /` | `reflect-api` |
//! | `STABLECOIN_API_SIMULATE_ERRORS` | Mount the simulated-error routes | `true` |

use std::net::SocketAddr;
use thiserror::Error;

const ENV_PREFIX: &str = "STABLECOIN_API_";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
    pub service_name: String,
    pub simulate_errors: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_filter: "info,tower_http=debug".to_string(),
            service_name: "reflect-api".to_string(),
            simulate_errors: true,
        }
    }
}

impl GatewayConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefixed = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));
        let mut config = Self::default();

        if let Some(host) = prefixed("HOST") {
            config.host = host;
        }
        if let Some((field, raw)) = prefixed("PORT")
            .map(|raw| (format!("{ENV_PREFIX}PORT"), raw))
            .or_else(|| lookup("PORT").map(|raw| ("PORT".to_string(), raw)))
        {
            config.port = raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field,
                message: format!("{raw:?} is not a port: {e}"),
            })?;
        }
        if let Some(filter) = prefixed("LOG") {
            config.log_filter = filter;
        }
        if let Some(name) = prefixed("SERVICE_NAME") {
            config.service_name = name;
        }
        if let Some(raw) = prefixed("SIMULATE_ERRORS") {
            config.simulate_errors = parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                field: format!("{ENV_PREFIX}SIMULATE_ERRORS"),
                message: format!("{raw:?} is not a boolean"),
            })?;
        }

        Ok(config)
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "host:port".to_string(),
                message: format!("{e}"),
            })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_plain_port_fallback() {
        assert_eq!(load(&[("PORT", "8080")]).unwrap().port, 8080);
    }

    #[test]
    fn test_prefixed_port_wins() {
        let config = load(&[("PORT", "8080"), ("STABLECOIN_API_PORT", "9090")]).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_simulate_errors_flag() {
        assert!(!load(&[("STABLECOIN_API_SIMULATE_ERRORS", "false")]).unwrap().simulate_errors);
        assert!(load(&[("STABLECOIN_API_SIMULATE_ERRORS", "ON")]).unwrap().simulate_errors);
        assert!(load(&[("STABLECOIN_API_SIMULATE_ERRORS", "maybe")]).is_err());
    }

    #[test]
    fn test_invalid_host() {
        let config = load(&[("STABLECOIN_API_HOST", "not a host")]).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
