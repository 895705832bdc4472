//! Configuration types and loading logic.

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Server listen configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level filter (e.g. "info", "debug", "integration_secrets=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_listen_address() -> String {
    "localhost:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from TOML file and environment variables.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SECRETS_ prefix, __ for nesting)
    /// 2. TOML config file (missing file is an empty provider)
    /// 3. Defaults
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        let config: ServiceConfig = Figment::new()
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("SECRETS_").split("__"))
            .extract()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost_8080() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.listen_address, "localhost:8080");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn toml_overrides_listen_address() {
        let config: ServiceConfig = Figment::new()
            .merge(Toml::string("[server]\nlisten_address = \"127.0.0.1:9090\"\n"))
            .extract()
            .unwrap();
        assert_eq!(config.server.listen_address, "127.0.0.1:9090");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ServiceConfig::load("no-such-file.toml").unwrap();
        assert_eq!(config.server.listen_address, "localhost:8080");
    }
}
