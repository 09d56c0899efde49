//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use crate::Result;
use crate::error::Error;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the provider to resolve from the registry
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Inject the documentation-search collaborator into agents that use it
    #[serde(default = "default_documentation")]
    pub documentation: bool,

    /// Domain id → role id used instead of the domain's default role
    #[serde(default)]
    pub role_overrides: BTreeMap<String, String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_documentation() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            documentation: default_documentation(),
            role_overrides: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Get the config directory path
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".nixai")
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load configuration from the default location
pub fn load() -> Result<Config> {
    load_from(&config_path())
}

/// Load configuration from a specific file
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(Error::Config(format!(
            "Config not found at {:?}",
            path
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<()> {
    save_to(config, &config_path())
}

/// Save configuration to a specific file
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    // Create parent directory
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider, "ollama");
        assert!(config.documentation);
        assert!(config.role_overrides.is_empty());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"provider": "gemini"}"#).unwrap();
        assert_eq!(config.provider, "gemini");
        assert!(config.documentation);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config
            .role_overrides
            .insert("diagnose".to_string(), "diagnoser".to_string());
        save_to(&config, &path).unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.role_overrides.get("diagnose").map(String::as_str), Some("diagnoser"));
    }

    #[test]
    fn test_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
