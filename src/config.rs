//! Application configuration.
//!
//! Configuration is read from a `config.json` in the working directory.
//! Every field has a default, so a missing file just means default
//! settings; a malformed file is reported and ignored.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error while reading the config file.
    Io(io::Error),
    /// The config file is not valid JSON or has the wrong shape.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "config parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window configuration.
    pub window: WindowConfig,
    /// Exercise to start on (1 to 4).
    pub exercise: u32,
    /// Directory holding one subdirectory per shader program.
    pub shaders_dir: PathBuf,
    /// RGBA color used to clear the framebuffer each frame.
    pub clear_color: [f32; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            exercise: 1,
            shaders_dir: PathBuf::from("assets/shaders"),
            clear_color: [0.5, 0.0, 0.5, 1.0],
        }
    }
}

impl Config {
    /// Loads the configuration from the given JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                log::warn!(
                    "Failed to load {}: {}. Using defaults.",
                    path.as_ref().display(),
                    err
                );
                Self::default()
            }
        }
    }
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Start in desktop fullscreen mode.
    pub fullscreen: bool,
    /// Enable VSync.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello You~".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.exercise, 1);
        assert_eq!(config.shaders_dir, PathBuf::from("assets/shaders"));
        assert_eq!(config.clear_color, [0.5, 0.0, 0.5, 1.0]);
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert!(!config.window.fullscreen);
        assert!(config.window.vsync);
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "window": {
                "title": "Exercises",
                "width": 1280,
                "height": 720,
                "fullscreen": true,
                "vsync": false
            },
            "exercise": 3,
            "shaders_dir": "shaders",
            "clear_color": [0.0, 0.0, 0.0, 1.0]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.window.title, "Exercises");
        assert_eq!(config.window.width, 1280);
        assert!(config.window.fullscreen);
        assert!(!config.window.vsync);
        assert_eq!(config.exercise, 3);
        assert_eq!(config.shaders_dir, PathBuf::from("shaders"));
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{ "exercise": 4, "window": { "title": "Pulse" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.exercise, 4);
        assert_eq!(config.window.title, "Pulse");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.shaders_dir, PathBuf::from("assets/shaders"));
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("glstarter_test_no_such_config.json");
        let config = Config::load_or_default(&path);
        assert_eq!(config.exercise, 1);
    }

    #[test]
    fn test_load_roundtrip() {
        let path = std::env::temp_dir().join("glstarter_test_config.json");
        let mut config = Config::default();
        config.exercise = 2;
        config.window.title = "Rectangle".to_string();
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.exercise, 2);
        assert_eq!(loaded.window.title, "Rectangle");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let err: ConfigError = serde_json::from_str::<Config>("{ not json }")
            .map_err(ConfigError::from)
            .unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("parse error"));
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
