//! Configuration management for bankweb
//!
//! Loads settings from a YAML file with serde defaults, so an empty or
//! missing file yields a runnable configuration. The backend base URL can
//! additionally be overridden through the BANKWEB_BACKEND_URL environment
//! variable, which wins over the file.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigErrorCode, ConfigErrorSeverity, ConfigResult};

/// Environment variable overriding the backend base URL
pub const BACKEND_URL_ENV: &str = "BANKWEB_BACKEND_URL";

// ==================== Configuration Types ====================

/// Server configuration - where bankweb itself listens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Remote banking service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the account collection resource
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api/accounts".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote backend settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A missing file falls back to defaults; an unreadable or malformed
    /// file is an error. The environment override is applied afterwards.
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|_| ConfigError::IoError {
                path: path.to_string_lossy().to_string(),
            })?;
            serde_yaml::from_str(&content).map_err(|e| ConfigError::InvalidYaml {
                message: e.to_string(),
            })?
        } else {
            Config::default()
        };

        config.override_base_url(std::env::var(BACKEND_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply an external base URL override (ignored when empty)
    pub fn override_base_url(&mut self, value: Option<String>) {
        if let Some(url) = value {
            if !url.trim().is_empty() {
                self.backend.base_url = url.trim().to_string();
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        let url = self.backend.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "backend.base_url".to_string(),
                reason: "Backend base URL must not be empty".to_string(),
            });
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "backend.base_url".to_string(),
                reason: "Backend base URL must start with http:// or https://".to_string(),
            });
        }

        Ok(())
    }

    /// Backend base URL without a trailing slash
    pub fn backend_base_url(&self) -> String {
        self.backend.base_url.trim().trim_end_matches('/').to_string()
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

// ==================== Tests ====================
