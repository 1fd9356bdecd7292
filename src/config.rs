//! Display preferences — YAML load/save for ~/.midinote/config.yaml.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::note::DisplayConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O: {0}")]
    Io(#[from] io::Error),
    #[error("config file is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Default path for the display config.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".midinote");
    path.push("config.yaml");
    path
}

/// Load a display config from a YAML file. Returns the default if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<DisplayConfig, ConfigError> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(DisplayConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&content)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Save a display config to a YAML file, creating parent directories as needed.
pub fn save_config(path: &Path, config: &DisplayConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    log::debug!("saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::AccentStyle;
    use tempfile::NamedTempFile;

    #[test]
    fn load_nonexistent_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let file = NamedTempFile::new().unwrap();
        let config = DisplayConfig::new([AccentStyle::Flat, AccentStyle::Natural], true);

        save_config(file.path(), &config).unwrap();
        let loaded = load_config(file.path()).unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("config.yaml");

        save_config(&path, &DisplayConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "accent_style: [purple]\n").unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn default_path_under_midinote_dir() {
        let path = default_config_path();
        assert!(path.ends_with(".midinote/config.yaml"));
    }
}
