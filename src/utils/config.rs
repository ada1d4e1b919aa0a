//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::defaults;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "tweet_trends.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data file locations
    pub data: DataSettings,
    /// Command defaults
    pub display: DisplaySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Load `path` if given, else the default file if present, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => load_config(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_config(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

/// Locations of the static data files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// `word,value` CSV
    pub sentiments_path: PathBuf,
    /// JSON object of region name to shapes
    pub states_path: PathBuf,
    /// Tab-separated tweet file
    pub tweets_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            sentiments_path: PathBuf::from("data/sentiments.csv"),
            states_path: PathBuf::from("data/states.json"),
            tweets_path: PathBuf::from("data/all_tweets.txt"),
        }
    }
}

/// Defaults for the CLI commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Region the `centered` command measures from
    pub center_region: String,
    /// Number of regions listed by `centered`
    pub nearest_count: usize,
    /// Search term used when none is given
    pub default_term: String,
    /// Use area-weighted centers for multi-polygon regions
    pub weighted_centers: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            center_region: defaults::CENTER_REGION.to_string(),
            nearest_count: defaults::NEAREST_COUNT,
            default_term: defaults::SEARCH_TERM.to_string(),
            weighted_centers: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from a `.json` or `.toml` file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::FileError(format!("{}: {}", path.as_ref().display(), e)))?;

    match extension(path.as_ref()) {
        "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        ext => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

/// Save configuration to a `.json` or `.toml` file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigError> {
    let content = match extension(path.as_ref()) {
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        ext => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
    };

    std::fs::write(path, content).map_err(|e| ConfigError::FileError(e.to_string()))
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Serialization error
    #[error("Serialize error: {0}")]
    SerializeError(String),
    /// Unsupported format
    #[error("Unsupported config format: {0:?}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.display.center_region, "TX");
        assert_eq!(config.display.nearest_count, 10);
        assert!(!config.display.weighted_centers);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ncenter_region = \"CA\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.display.center_region, "CA");
        assert_eq!(config.display.nearest_count, 10);
        assert_eq!(config.data, DataSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = AppConfig::default();
        config.data.tweets_path = PathBuf::from("/tmp/tweets.txt");
        config.display.weighted_centers = true;

        for name in ["config.json", "config.toml"] {
            let path = dir.path().join(name);
            save_config(&config, &path).unwrap();
            assert_eq!(load_config(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "level = info").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::UnsupportedFormat(_))));
        assert!(matches!(
            save_config(&AppConfig::default(), &path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(matches!(
            AppConfig::resolve(Some(missing.as_path())),
            Err(ConfigError::FileError(_))
        ));
    }
}
