//! Server configuration read from the environment.

use thiserror::Error;

/// Database path that selects the in-memory store instead of SQLite.
pub const IN_MEMORY_DB: &str = ":memory:";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}' is not a port number")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite database path, or [`IN_MEMORY_DB`].
    pub db_path: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_path: "gaenari.db".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Reads `GAENARI_DB_PATH`, `GAENARI_HOST` and `GAENARI_PORT`, falling back
    /// to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("GAENARI_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: "GAENARI_PORT",
                value,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            db_path: lookup("GAENARI_DB_PATH").unwrap_or(defaults.db_path),
            host: lookup("GAENARI_HOST").unwrap_or(defaults.host),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path == IN_MEMORY_DB
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("GAENARI_DB_PATH", ":memory:"),
            ("GAENARI_HOST", "127.0.0.1"),
            ("GAENARI_PORT", "8081"),
        ]))
        .unwrap();
        assert!(config.is_in_memory());
        assert_eq!(config.bind_address(), "127.0.0.1:8081");
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("GAENARI_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("GAENARI_PORT"));
        assert!(ServerConfig::from_lookup(lookup(&[("GAENARI_PORT", "70000")])).is_err());
    }
}
