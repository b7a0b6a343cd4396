//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USERS_URL;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Remote API configuration
    pub api: ApiConfig,
    /// Logging configuration
    pub log: LogConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// User list endpoint
    pub users_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Also write a daily-rolling log file in the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[log]\nfile = true\n").expect("valid toml");
        assert_eq!(config.api.users_url, DEFAULT_USERS_URL);
        assert_eq!(config.log.level, "info");
        assert!(config.log.file);
    }

    #[test]
    fn test_override_users_url() {
        let config: AppConfig =
            toml::from_str("[api]\nusers_url = \"http://localhost:9000/users\"\n").expect("valid toml");
        assert_eq!(config.api.users_url, "http://localhost:9000/users");
    }
}
