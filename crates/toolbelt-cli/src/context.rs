// Rust guideline compliant 2026-10-16

//! Per-invocation state shared by all commands.

use anyhow::{Context as _, Result};
use std::path::Path;
use toolbelt_core::{ColorMode, Config, Logger};

/// Loaded configuration plus the console logger built from it.
pub struct Context {
    /// Effective configuration after file, env and flag overrides.
    pub config: Config,
    /// Console logger built from `config`.
    pub logger: Logger,
}

impl Context {
    /// Loads configuration and applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file or environment is invalid.
    pub fn load(config_path: Option<&Path>, no_color: bool) -> Result<Self> {
        let mut config = Config::load(config_path).context("Failed to load configuration")?;
        if no_color {
            config.color = ColorMode::Never;
        }
        let logger = Logger::from_config(&config);
        Ok(Self { config, logger })
    }
}
