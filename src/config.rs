// src/config.rs
use std::net::IpAddr;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid HOST '{0}': expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Use PostgreSQL for the waitlist when set, memory otherwise.
    pub database_url: Option<String>,
    /// Single allowed CORS origin. Any origin when unset.
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match get("HOST") {
            Some(h) => h.parse().map_err(|_| ConfigError::InvalidHost(h))?,
            None => DEFAULT_HOST.parse().map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.into()))?,
        };

        let port = match get("PORT") {
            Some(p) => p.parse().map_err(|_| ConfigError::InvalidPort(p))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            host,
            port,
            database_url: get("DATABASE_URL"),
            cors_allow_origin: get("CORS_ALLOW_ORIGIN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, None);
        assert_eq!(config.cors_allow_origin, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/profitdesk"),
            ("CORS_ALLOW_ORIGIN", "https://example.com"),
        ]))
        .unwrap();

        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/profitdesk"));
        assert_eq!(config.cors_allow_origin.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_blank_database_url_is_unset() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert_eq!(
            Config::from_lookup(lookup(&[("PORT", "eighty")])),
            Err(ConfigError::InvalidPort("eighty".into()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("PORT", "70000")])),
            Err(ConfigError::InvalidPort("70000".into()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("HOST", "localhost")])),
            Err(ConfigError::InvalidHost("localhost".into()))
        );
    }
}
