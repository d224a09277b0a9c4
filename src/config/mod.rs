//! Application configuration loading and validation.
//!
//! Configuration is an optional TOML file. Every section falls back to the
//! built-in defaults, so running without a file targets Base mainnet and the
//! local frontend on port 3000.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

mod logging;
mod pairs;
mod render;

pub use logging::LoggingConfig;
pub use pairs::{PairsConfig, BASE_MAINNET_RPC, DEFAULT_PAIR_LIMIT, PAIR_STORAGE_BASE};
pub use render::RenderConfig;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "defi-probe.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pairs: PairsConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit path, or the default file if present, or defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            let config = Self::load(&fallback)?;
            return Ok((config, Some(fallback)));
        }

        Ok((Self::default(), None))
    }

    pub fn validate(&self) -> Result<()> {
        if self.pairs.provider_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "provider_url",
            }
            .into());
        }
        url::Url::parse(&self.pairs.provider_url).map_err(|e| ConfigError::InvalidValue {
            field: "provider_url",
            reason: e.to_string(),
        })?;
        Address::from_str(&self.pairs.pair_storage).map_err(|e| ConfigError::InvalidValue {
            field: "pair_storage",
            reason: e.to_string(),
        })?;
        if self.pairs.limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "limit",
                reason: "must be at least 1".into(),
            }
            .into());
        }

        if self.render.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }
        url::Url::parse(&self.render.url).map_err(|e| ConfigError::InvalidValue {
            field: "url",
            reason: e.to_string(),
        })?;
        for (field, value) in [
            ("heading_timeout_ms", self.render.heading_timeout_ms),
            ("text_timeout_ms", self.render.text_timeout_ms),
            ("poll_interval_ms", self.render.poll_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than zero".into(),
                }
                .into());
            }
        }
        if self.render.success_file.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "success_file",
            }
            .into());
        }
        if self.render.error_file.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "error_file" }.into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
