//! ConfigStore - Local Configuration Storage
//!
//! Loading does not log: configuration is read before the subscriber exists,
//! so the caller reports [`LoadedConfig::source`] once logging is up.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::AppConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// File missing or blank at this path; defaults used
    Defaults(PathBuf),
}

/// A configuration together with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Report the origin; call after the subscriber is installed
    pub fn log_source(&self) {
        match &self.source {
            ConfigSource::File(path) => info!("Configuration loaded from {}", path.display()),
            ConfigSource::Defaults(path) => {
                debug!("No config file at {}, using defaults", path.display())
            }
        }
    }
}

/// Path of `config.toml` in the platform config directory
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the configuration from the platform config directory
pub fn load_config() -> Result<LoadedConfig> {
    let path = config_path()?;
    load_config_from(&path)
}

/// Load a TOML config file; a missing or blank file yields defaults
pub fn load_config_from(path: &Path) -> Result<LoadedConfig> {
    let defaults = || LoadedConfig {
        config: AppConfig::default(),
        source: ConfigSource::Defaults(path.to_path_buf()),
    };

    if !path.exists() {
        return Ok(defaults());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(defaults());
    }

    Ok(LoadedConfig {
        config: toml::from_str(&content)?,
        source: ConfigSource::File(path.to_path_buf()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        let loaded = load_config_from(&path).expect("defaults");
        assert_eq!(loaded.config, AppConfig::default());
        assert_eq!(loaded.source, ConfigSource::Defaults(path));
    }

    #[test]
    fn test_blank_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "  \n").expect("write");
        let loaded = load_config_from(&path).expect("defaults");
        assert_eq!(loaded.config, AppConfig::default());
        assert!(matches!(loaded.source, ConfigSource::Defaults(_)));
    }

    #[test]
    fn test_file_values_are_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "[api]\nusers_url = \"http://127.0.0.1:8080/users\"\n\n[log]\nlevel = \"debug\"\n",
        )
        .expect("write");

        let loaded = load_config_from(&path).expect("load");
        assert_eq!(loaded.config.api.users_url, "http://127.0.0.1:8080/users");
        assert_eq!(loaded.config.log.level, "debug");
        assert_eq!(loaded.source, ConfigSource::File(path));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[api\nusers_url = 1").expect("write");
        assert!(matches!(
            load_config_from(&path),
            Err(crate::error::Error::TomlDe { .. })
        ));
    }
}
