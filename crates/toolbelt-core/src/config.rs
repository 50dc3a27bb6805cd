// Rust guideline compliant 2026-10-16

//! Configuration management for toolbelt.

use crate::progress::glyphs;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(Error::Config(format!(
                "color must be auto, always, or never, got '{other}'"
            ))),
        }
    }
}

/// Configuration for logging, progress reporting and compressed output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color mode for console output.
    #[serde(default)]
    pub color: ColorMode,

    /// Count of items between progress re-renders.
    #[serde(default = "default_update_interval")]
    pub update_interval: u64,

    /// Width of the gauge bar in characters.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Spinner animation period in milliseconds.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,

    /// Name of the spinner glyph set.
    #[serde(default = "default_spinner")]
    pub spinner: String,

    /// Whether error-level log lines go to stderr instead of stdout.
    #[serde(default = "default_errors_to_stderr")]
    pub errors_to_stderr: bool,

    /// Compression level (1-9) for gzip and bzip2 output.
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
}

fn default_update_interval() -> u64 {
    1000
}

fn default_bar_width() -> usize {
    20
}

fn default_tick_millis() -> u64 {
    100
}

fn default_spinner() -> String {
    "line".to_string()
}

fn default_errors_to_stderr() -> bool {
    true
}

fn default_compression_level() -> u32 {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            update_interval: default_update_interval(),
            bar_width: default_bar_width(),
            tick_millis: default_tick_millis(),
            spinner: default_spinner(),
            errors_to_stderr: default_errors_to_stderr(),
            compression_level: default_compression_level(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, when given
    /// 3. Environment variables with `TOOLBELT_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file is missing or cannot be read
    /// - Configuration file contains invalid TOML
    /// - An environment override cannot be parsed
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            let content = std::fs::read_to_string(path).map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TOOLBELT_COLOR` - auto/always/never
    /// - `TOOLBELT_UPDATE_INTERVAL` - items between re-renders
    /// - `TOOLBELT_BAR_WIDTH` - gauge width
    /// - `TOOLBELT_TICK_MILLIS` - spinner period
    /// - `TOOLBELT_SPINNER` - glyph set name
    /// - `TOOLBELT_ERRORS_TO_STDERR` - true/false
    /// - `TOOLBELT_COMPRESSION_LEVEL` - 1-9
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TOOLBELT_COLOR") {
            self.color = val.parse()?;
        }

        if let Ok(val) = std::env::var("TOOLBELT_UPDATE_INTERVAL") {
            self.update_interval = parse_env("TOOLBELT_UPDATE_INTERVAL", &val, "a positive number")?;
        }

        if let Ok(val) = std::env::var("TOOLBELT_BAR_WIDTH") {
            self.bar_width = parse_env("TOOLBELT_BAR_WIDTH", &val, "a positive number")?;
        }

        if let Ok(val) = std::env::var("TOOLBELT_TICK_MILLIS") {
            self.tick_millis = parse_env("TOOLBELT_TICK_MILLIS", &val, "a positive number")?;
        }

        if let Ok(val) = std::env::var("TOOLBELT_SPINNER") {
            self.spinner = val;
        }

        if let Ok(val) = std::env::var("TOOLBELT_ERRORS_TO_STDERR") {
            self.errors_to_stderr = parse_env("TOOLBELT_ERRORS_TO_STDERR", &val, "true or false")?;
        }

        if let Ok(val) = std::env::var("TOOLBELT_COMPRESSION_LEVEL") {
            self.compression_level = parse_env("TOOLBELT_COMPRESSION_LEVEL", &val, "a number 1-9")?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - update_interval, bar_width or tick_millis is zero
    /// - spinner does not name a known glyph set
    /// - compression_level is out of range (1-9)
    pub fn validate(&self) -> Result<()> {
        if self.update_interval == 0 {
            return Err(Error::Config(
                "update_interval must be greater than 0".to_string(),
            ));
        }

        if self.bar_width == 0 {
            return Err(Error::Config("bar_width must be greater than 0".to_string()));
        }

        if self.tick_millis == 0 {
            return Err(Error::Config("tick_millis must be greater than 0".to_string()));
        }

        if glyphs::by_name(&self.spinner).is_none() {
            return Err(Error::Config(format!(
                "unknown spinner '{}', expected one of: {}",
                self.spinner,
                glyphs::names().join(", ")
            )));
        }

        if !(1..=9).contains(&self.compression_level) {
            return Err(Error::Config(format!(
                "compression_level must be 1-9, got {}",
                self.compression_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Spinner animation period.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str, expected: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{name} must be {expected}")))
}
