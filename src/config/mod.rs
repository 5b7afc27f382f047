use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::names::Gender;

/// Color overrides, each a `#RRGGBB` or `#RGB` string
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Initial value of the gender selector
    #[serde(default)]
    pub default_gender: Gender,

    /// Custom name table to use instead of the bundled one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names_file: Option<PathBuf>,

    /// How long the empty-name warning stays visible
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,

    /// Also raise warnings as desktop notifications
    #[serde(default)]
    pub desktop_notifications: bool,

    #[serde(default)]
    pub theme: ThemeConfig,
}

fn default_toast_seconds() -> u64 {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_gender: Gender::default(),
            names_file: None,
            toast_seconds: default_toast_seconds(),
            desktop_notifications: false,
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Get the config file path (`NAMEGEN_CONFIG` wins over the config dir)
    fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("NAMEGEN_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("namegen");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };
        Ok(Self::load_from(&path))
    }

    /// Load config from `path`, falling back to defaults on any problem.
    /// Writes a default file when none exists yet.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
            return AppConfig::default();
        }

        let config = AppConfig::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Could not write default config: {}", e);
        }
        config
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            default_gender: Gender::Female,
            names_file: Some(PathBuf::from("/tmp/names.toml")),
            toast_seconds: 5,
            desktop_notifications: true,
            theme: ThemeConfig {
                accent: Some("#FFC107".to_string()),
                ..Default::default()
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("default_gender = \"female\"").unwrap();
        assert_eq!(config.default_gender, Gender::Female);
        assert_eq!(config.toast_seconds, 3);
        assert!(!config.desktop_notifications);
        assert!(config.names_file.is_none());
    }

    #[test]
    fn test_load_from_missing_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig::load_from(&path);
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_from_malformed_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_gender = \"robot\"").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn test_toast_duration() {
        let config = AppConfig {
            toast_seconds: 7,
            ..Default::default()
        };
        assert_eq!(config.toast_duration(), Duration::from_secs(7));
    }
}
