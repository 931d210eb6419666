//! Server configuration read from environment variables.
//!
//! - `SHELF_HOST`: listen address (default: "0.0.0.0")
//! - `SHELF_PORT`: listen port (default: 5000)
//! - `SHELF_SEED_PATH`: JSON seed file (default: built-in seed)
//! - `SHELF_GRAPHIQL`: serve the GraphiQL page on `GET /graphql` (default: true)

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub graphiql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_path: None,
            graphiql: true,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value. Unset and empty variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = ServerConfig::default();

        let host = get("SHELF_HOST").unwrap_or(defaults.host);

        let port = match get("SHELF_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: "SHELF_PORT",
                value,
            })?,
            None => defaults.port,
        };

        let seed_path = get("SHELF_SEED_PATH").map(PathBuf::from);

        let graphiql = match get("SHELF_GRAPHIQL") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                var: "SHELF_GRAPHIQL",
                value,
            })?,
            None => defaults.graphiql,
        };

        Ok(ServerConfig {
            host,
            port,
            seed_path,
            graphiql,
        })
    }

    /// `host:port` suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("SHELF_HOST", "127.0.0.1"),
            ("SHELF_PORT", "8080"),
            ("SHELF_SEED_PATH", "/tmp/seed.json"),
            ("SHELF_GRAPHIQL", "off"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert!(!config.graphiql);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = config_from(&[("SHELF_PORT", ""), ("SHELF_SEED_PATH", "  ")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("SHELF_PORT", "99999")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(err.to_string().contains("SHELF_PORT"));
    }

    #[test]
    fn rejects_bad_flag() {
        let err = config_from(&[("SHELF_GRAPHIQL", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { .. }));
    }
}
