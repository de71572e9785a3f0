use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::QueryConfig;
use super::transport::{LocalTransportConfig, RemoteTransportConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration, one table per concern
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub local: LocalTransportConfig,

    #[serde(default)]
    pub remote: RemoteTransportConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub local_port: Option<u16>,
    pub remote_endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the file at `config_path` (defaults when absent) and applies
    /// `overrides` on top.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Config::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.local_port {
            self.local.port = port;
        }
        if let Some(endpoint) = overrides.remote_endpoint {
            self.remote.endpoint = endpoint;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.query.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.local.port == 0 {
            return Err(ConfigError::Validation(
                "local.port must be between 1 and 65535".to_string(),
            ));
        }

        if !self.remote.endpoint.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "remote.endpoint must be an https:// URL, got '{}'",
                self.remote.endpoint
            )));
        }

        if self.query.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "query.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
