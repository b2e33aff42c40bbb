use crate::error::ConfigError;
use crate::model::{SavedState, SelectionType};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "file-selector";

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub selector: SelectorConfig,
    pub display: DisplayConfig,
}

/// Inputs a host hands to a selector when creating it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorConfig {
    /// "file" or "dir"
    pub selection_type: SelectionType,
    /// Directory shown first; the home directory when unset
    pub start_dir: Option<PathBuf>,
    /// Back moves to the parent directory instead of closing the host
    pub back_key_interruption: bool,
}

/// Row rendering configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format string for the modified column
    pub timestamp_format: String,
    /// How long an error toast stays on screen
    pub message_timeout_secs: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            selection_type: SelectionType::File,
            start_dir: None,
            back_key_interruption: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d %H:%M".to_string(),
            message_timeout_secs: 3,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or broken
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                warn!("{}; using default configuration", e);
                Config::default()
            }),
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        write_toml(path, self)
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
        }
        Ok(path)
    }
}

impl SavedState {
    /// Where a host keeps the selector state between runs
    pub fn state_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.data_dir().join("state.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        write_toml(path, self)
    }
}

fn write_toml<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(value)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.selector.selection_type, SelectionType::File);
        assert_eq!(config.selector.start_dir, None);
        assert!(config.selector.back_key_interruption);
        assert_eq!(config.display.timestamp_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.display.message_timeout_secs, 3);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.selector.selection_type = SelectionType::Dir;
        config.selector.start_dir = Some(PathBuf::from("/srv/media"));
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [selector]
            back_key_interruption = false
            "#,
        )
        .unwrap();
        assert!(!config.selector.back_key_interruption);
        assert_eq!(config.selector.selection_type, SelectionType::File);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.display.message_timeout_secs = 9;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_broken_file_is_parse_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.toml");
        fs::write(&path, "selector = 5").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_saved_state_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("state.toml");
        let state = SavedState {
            dir: Some(tmp.path().to_path_buf()),
        };
        state.save_to(&path).unwrap();
        assert_eq!(SavedState::load_from(&path).unwrap(), state);
    }
}
