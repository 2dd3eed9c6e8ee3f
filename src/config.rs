//! Configuration management for Keystroke Delay
//!
//! Settings are read from a TOML file in the platform-specific config
//! directory. A missing file means defaults.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/keystroke-delay/config.toml` |
//! | macOS | `~/Library/Application Support/keystroke-delay/config.toml` |
//! | Windows | `%APPDATA%\keystroke-delay\config.toml` |
//!
//! ## Example
//!
//! ```no_run
//! use keystroke_delay::Config;
//!
//! let mut config = Config::load().unwrap_or_default();
//! config.input.terminator = '!';
//! config.save().expect("Failed to save config");
//! ```

use crate::stats::DEFAULT_TERMINATOR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading or writing config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Config parsed but holds an unusable value
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Returns the path to the config file.
///
/// Only computes the path; nothing is created on disk.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("keystroke-delay").join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Input settings
    #[serde(default)]
    pub input: InputConfig,
    /// Chart output settings
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Character that ends collection
    pub terminator: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            terminator: DEFAULT_TERMINATOR,
        }
    }
}

/// Chart configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Where the SVG chart is written
    pub output: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("keystroke_delays.svg"),
        }
    }
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(&config_path()?)
    }

    fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Sources never yield whitespace, so a whitespace terminator could
    /// never end collection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.terminator.is_whitespace() {
            return Err(ConfigError::Invalid(format!(
                "terminator {:?} is whitespace",
                self.input.terminator
            )));
        }
        if self.chart.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("chart output path is empty".to_string()));
        }
        Ok(())
    }
}
